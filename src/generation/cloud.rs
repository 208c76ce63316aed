//! Generated point cloud.

use glam::DVec3;

/// One point per claimed voxel, in generation order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PointCloud {
    points: Vec<DVec3>,
}

impl PointCloud {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, point: DVec3) {
        self.points.push(point);
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn as_slice(&self) -> &[DVec3] {
        &self.points
    }

    pub fn iter(&self) -> impl Iterator<Item = &DVec3> {
        self.points.iter()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Single-precision XYZ triples, the layout point cloud consumers expect
    pub fn to_xyz_f32(&self) -> Vec<[f32; 3]> {
        self.points.iter().map(|p| p.as_vec3().to_array()).collect()
    }

    /// Packed native-endian XYZ f32 buffer (12 bytes per point)
    pub fn xyz_bytes(&self) -> Vec<u8> {
        bytemuck::cast_slice(&self.to_xyz_f32()).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_packed_buffer() {
        let mut cloud = PointCloud::new();
        cloud.push(DVec3::new(1.0, 2.0, 3.0));
        cloud.push(DVec3::new(-0.5, 0.25, 0.0));
        assert_eq!(cloud.to_xyz_f32(), vec![[1.0, 2.0, 3.0], [-0.5, 0.25, 0.0]]);

        let bytes = cloud.xyz_bytes();
        assert_eq!(bytes.len(), 24);
        assert_eq!(&bytes[0..4], &1.0f32.to_ne_bytes());
    }

    #[test]
    fn test_clear() {
        let mut cloud = PointCloud::new();
        cloud.push(DVec3::ZERO);
        cloud.clear();
        assert!(cloud.is_empty());
    }
}
