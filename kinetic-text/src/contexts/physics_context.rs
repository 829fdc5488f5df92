use anyhow::{anyhow, Result};
use glam::Vec3;
use hecs::Entity;
use rapier3d::na::Matrix3x1;
use rapier3d::prelude::*;

use crate::{
    components::{
        Collider as ColliderComponent, ForceMode, Impulse, PhysicsHandle,
        RigidBody as RigidBodyComponent,
    },
    util::{decompose_isometry, glam_vec_from_na, isometry_from_affine, na_vector_from_glam},
};

pub const DEFAULT_GRAVITY: Vec3 = Vec3::new(0.0, -9.81, 0.0);
pub const DEFAULT_TIMESTEP: f32 = 1. / 60.;

pub struct PhysicsContext {
    pub physics_pipeline: PhysicsPipeline,
    pub gravity: Matrix3x1<f32>,
    pub colliders: ColliderSet,
    pub broad_phase: BroadPhase,
    pub narrow_phase: NarrowPhase,
    pub rigid_bodies: RigidBodySet,
    pub island_manager: IslandManager,
    pub integration_parameters: IntegrationParameters,
    pub impulse_joints: ImpulseJointSet,
    pub multibody_joints: MultibodyJointSet,
    pub ccd_solver: CCDSolver,
}

impl Default for PhysicsContext {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY, DEFAULT_TIMESTEP)
    }
}

impl PhysicsContext {
    pub fn new(gravity: Vec3, timestep: f32) -> Self {
        let mut integration_parameters = IntegrationParameters::default();
        integration_parameters.dt = timestep;

        PhysicsContext {
            physics_pipeline: PhysicsPipeline::new(),
            gravity: na_vector_from_glam(gravity),
            colliders: ColliderSet::new(),
            broad_phase: BroadPhase::new(),
            narrow_phase: NarrowPhase::new(),
            rigid_bodies: RigidBodySet::new(),
            island_manager: IslandManager::new(),
            integration_parameters,
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    pub fn update(&mut self) {
        self.physics_pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.island_manager,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.rigid_bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            None,
            &(),
            &(),
        );
    }

    /// Create the simulator side of an entity, placed at `position` (in world space).
    pub fn create_rigid_body_and_collider(
        &mut self,
        entity: Entity,
        position: &glam::Affine3A,
        rigid_body: &RigidBodyComponent,
        collider: &ColliderComponent,
    ) -> PhysicsHandle {
        let user_data = entity.to_bits().get() as u128;
        let offset = collider.offset_from_parent;
        let mass = rigid_body.mass;
        let rigid_body = RigidBodyBuilder::new(rigid_body.body_type.into())
            .position(isometry_from_affine(position))
            .user_data(user_data)
            .build();
        let rigid_body_handle = self.rigid_bodies.insert(rigid_body);

        let collider = ColliderBuilder::new(collider.shape.clone())
            .position(Isometry::translation(offset.x, offset.y, offset.z))
            .sensor(collider.sensor)
            .mass(mass)
            .restitution(collider.restitution)
            .friction(collider.friction)
            .user_data(user_data)
            .build();
        let collider_handle =
            self.colliders
                .insert_with_parent(collider, rigid_body_handle, &mut self.rigid_bodies);

        PhysicsHandle {
            rigid_body: rigid_body_handle,
            collider: collider_handle,
        }
    }

    pub fn get_rigid_body(&mut self, handle: PhysicsHandle) -> Result<&mut RigidBody> {
        self.rigid_bodies
            .get_mut(handle.rigid_body)
            .ok_or_else(|| anyhow!("Unable to get Rigid Body for handle!"))
    }

    /// Apply a single impulse to the body. Kinematic and fixed bodies ignore impulses.
    ///
    /// Mass dependent modes rely on the body's mass properties, which the simulator only computes when it steps:
    /// don't use them on a body that hasn't been stepped as dynamic yet.
    pub fn apply_impulse(&mut self, handle: PhysicsHandle, impulse: &Impulse) -> Result<()> {
        let dt = self.integration_parameters.dt;
        let rigid_body = self.get_rigid_body(handle)?;
        if !rigid_body.is_dynamic() {
            return Ok(());
        }

        match impulse {
            Impulse::Linear { value, mode } => apply_linear(rigid_body, *value, *mode, dt),
            Impulse::Torque { value, mode } => apply_angular(rigid_body, *value, *mode, dt),
            Impulse::Explosion(explosion) => {
                let point = glam_vec_from_na(rigid_body.translation());
                if let Some(push) = explosion.impulse_at(point) {
                    apply_linear(rigid_body, push, explosion.mode, dt);
                }
            }
        }

        Ok(())
    }
}

fn apply_linear(rigid_body: &mut RigidBody, value: Vec3, mode: ForceMode, dt: f32) {
    let delta = na_vector_from_glam(mode.per_step(value, dt));
    if mode.ignores_mass() {
        let velocity = rigid_body.linvel() + delta;
        rigid_body.set_linvel(velocity, true);
    } else {
        rigid_body.apply_impulse(delta, true);
    }
}

fn apply_angular(rigid_body: &mut RigidBody, value: Vec3, mode: ForceMode, dt: f32) {
    let delta = na_vector_from_glam(mode.per_step(value, dt));
    if mode.ignores_mass() {
        let velocity = rigid_body.angvel() + delta;
        rigid_body.set_angvel(velocity, true);
    } else {
        rigid_body.apply_torque_impulse(delta, true);
    }
}

/// Where the body is now, as a glam affine
pub(crate) fn body_affine(rigid_body: &RigidBody) -> glam::Affine3A {
    let (rotation, translation) = decompose_isometry(rigid_body.position());
    glam::Affine3A::from_rotation_translation(rotation, translation)
}
