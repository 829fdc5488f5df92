use glam::{Affine3A, Quat, Vec3};
use rapier3d::na::{self, Isometry3, Vector3};

#[inline]
/// Convert a [`glam::Affine3A`] into a [`rapier3d::na::Isometry3`]. Scale is discarded.
pub fn isometry_from_affine(a: &Affine3A) -> Isometry3<f32> {
    let (_, r, t) = a.to_scale_rotation_translation();
    let translation = na::Translation3::new(t.x, t.y, t.z);

    let rotation: na::UnitQuaternion<f32> =
        na::UnitQuaternion::new_unchecked(na::Quaternion::new(r.w, r.x, r.y, r.z));

    Isometry3::from_parts(translation, rotation)
}

#[inline]
/// Decompose a [`rapier3d::na::Isometry3`] into its rotation and translation components
pub fn decompose_isometry(i: &Isometry3<f32>) -> (Quat, Vec3) {
    let q = i.rotation.quaternion();
    (
        Quat::from_xyzw(q.i, q.j, q.k, q.w),
        glam_vec_from_na(&i.translation.vector),
    )
}

#[inline]
/// Convert a [`glam::Vec3`] into a [`rapier3d::na::Vector3`]
pub fn na_vector_from_glam(v: Vec3) -> Vector3<f32> {
    [v.x, v.y, v.z].into()
}

#[inline]
/// Convert a [`rapier3d::na::Vector3`] into a [`glam::Vec3`]
pub fn glam_vec_from_na(v: &Vector3<f32>) -> Vec3 {
    mint::Vector3::from([v.x, v.y, v.z]).into()
}
