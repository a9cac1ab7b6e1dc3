//! Triangle removal.

use crate::mesh::Mesh;
use glam::DVec3;

impl Mesh {
    /// Removes every triangle for which `predicate` returns true.
    ///
    /// Colours and UVs of removed triangles are dropped with them. Returns
    /// the number of triangles removed.
    pub fn remove_faces(
        &mut self,
        mut predicate: impl FnMut(DVec3, DVec3, DVec3) -> bool,
    ) -> usize {
        let keep: Vec<bool> = self
            .triangles()
            .map(|[a, b, c]| !predicate(a, b, c))
            .collect();
        let removed = keep.iter().filter(|k| !**k).count();
        if removed == 0 {
            return 0;
        }

        self.vertices = retain_triangles(&self.vertices, &keep);
        if let Some(colors) = &self.colors {
            self.colors = Some(retain_triangles(colors, &keep));
        }
        if let Some(uvs) = &self.uvs {
            self.uvs = Some(retain_triangles(uvs, &keep));
        }
        removed
    }
}

fn retain_triangles<T: Copy>(values: &[T], keep: &[bool]) -> Vec<T> {
    values
        .chunks_exact(3)
        .zip(keep)
        .filter(|(_, keep)| **keep)
        .flat_map(|(tri, _)| tri.iter().copied())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    #[test]
    fn test_remove_faces_compacts_colors() {
        let mut mesh = Mesh::from_vertices(vec![
            DVec3::ZERO,
            DVec3::X,
            DVec3::Y,
            DVec3::NEG_Y,
            DVec3::X,
            DVec3::ZERO,
        ]);
        mesh.set_vertex_color(|v| Vec3::splat(v.y as f32));

        let removed = mesh.remove_faces(|a, b, c| a.y + b.y + c.y < 0.0);
        assert_eq!(removed, 1);
        assert_eq!(mesh.triangle_count(), 1);
        assert_eq!(mesh.colors().unwrap(), &[Vec3::ZERO, Vec3::ZERO, Vec3::ONE]);
        assert!(mesh.validate().is_ok());
    }

    #[test]
    fn test_remove_all_faces() {
        let mut mesh = Mesh::from_vertices(vec![DVec3::ZERO, DVec3::X, DVec3::Y]);
        assert_eq!(mesh.remove_faces(|_, _, _| true), 1);
        assert!(mesh.is_empty());
    }
}
