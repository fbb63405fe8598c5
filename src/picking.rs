use glam::Vec2;

use crate::camera::Ray;

/// A pickable gallery plane: an axis-aligned rectangle on the z = 0 page
/// plane, centered at `position`, in pixel units.
#[derive(Debug, Clone, Copy)]
pub struct PlaneTarget {
    pub position: Vec2,
    pub width: f32,
    pub height: f32,
}

/// Result of a successful pick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneHit {
    pub index: usize,
    pub t: f32,
    /// UV of the hit point, (0,0) at the bottom-left corner of the plane.
    pub uv: Vec2,
}

/// Intersect a ray with one plane rectangle. Returns distance and UV.
pub fn intersect_plane(ray: &Ray, plane: &PlaneTarget) -> Option<(f32, Vec2)> {
    const EPSILON: f32 = 1e-8;

    if ray.dir.z.abs() < EPSILON {
        return None; // parallel to the page plane
    }

    let t = -ray.origin.z / ray.dir.z;
    if t <= 0.0 {
        return None;
    }

    let hit = ray.origin + ray.dir * t;
    let local = Vec2::new(hit.x, hit.y) - plane.position;
    if local.x.abs() > plane.width / 2.0 || local.y.abs() > plane.height / 2.0 {
        return None;
    }

    let uv = Vec2::new(
        local.x / plane.width + 0.5,
        local.y / plane.height + 0.5,
    );
    Some((t, uv))
}

/// Pick the nearest plane under the ray. With every plane at z = 0 the
/// nearest hit also happens to be the first, matching the original
/// first-intersection behavior.
pub fn pick(ray: &Ray, planes: &[PlaneTarget]) -> Option<PlaneHit> {
    let mut nearest: Option<PlaneHit> = None;

    for (index, plane) in planes.iter().enumerate() {
        if let Some((t, uv)) = intersect_plane(ray, plane) {
            let closer = nearest.map_or(true, |hit| t < hit.t);
            if closer {
                nearest = Some(PlaneHit { index, t, uv });
            }
        }
    }

    nearest
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn straight_ray(x: f32, y: f32) -> Ray {
        Ray {
            origin: Vec3::new(x, y, 660.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        }
    }

    fn plane_at(x: f32, y: f32, w: f32, h: f32) -> PlaneTarget {
        PlaneTarget {
            position: Vec2::new(x, y),
            width: w,
            height: h,
        }
    }

    #[test]
    fn center_hit_has_center_uv() {
        let plane = plane_at(0.0, 0.0, 200.0, 100.0);
        let (t, uv) = intersect_plane(&straight_ray(0.0, 0.0), &plane).unwrap();
        assert!((t - 660.0).abs() < 1e-3);
        assert!((uv - Vec2::new(0.5, 0.5)).length() < 1e-5);
    }

    #[test]
    fn corner_hits_map_to_uv_corners() {
        let plane = plane_at(0.0, 0.0, 200.0, 100.0);

        let (_, uv) = intersect_plane(&straight_ray(-100.0, -50.0), &plane).unwrap();
        assert!((uv - Vec2::new(0.0, 0.0)).length() < 1e-5);

        let (_, uv) = intersect_plane(&straight_ray(100.0, 50.0), &plane).unwrap();
        assert!((uv - Vec2::new(1.0, 1.0)).length() < 1e-5);
    }

    #[test]
    fn miss_outside_rect() {
        let plane = plane_at(0.0, 0.0, 200.0, 100.0);
        assert!(intersect_plane(&straight_ray(150.0, 0.0), &plane).is_none());
        assert!(intersect_plane(&straight_ray(0.0, 80.0), &plane).is_none());
    }

    #[test]
    fn parallel_ray_misses() {
        let plane = plane_at(0.0, 0.0, 200.0, 100.0);
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, 10.0),
            dir: Vec3::new(1.0, 0.0, 0.0),
        };
        assert!(intersect_plane(&ray, &plane).is_none());
    }

    #[test]
    fn ray_behind_plane_misses() {
        let plane = plane_at(0.0, 0.0, 200.0, 100.0);
        let ray = Ray {
            origin: Vec3::new(0.0, 0.0, -10.0),
            dir: Vec3::new(0.0, 0.0, -1.0),
        };
        assert!(intersect_plane(&ray, &plane).is_none());
    }

    #[test]
    fn pick_reports_the_plane_under_the_pointer() {
        let planes = [
            plane_at(-300.0, 0.0, 200.0, 150.0),
            plane_at(300.0, 0.0, 200.0, 150.0),
        ];

        let hit = pick(&straight_ray(300.0, 0.0), &planes).unwrap();
        assert_eq!(hit.index, 1);

        let hit = pick(&straight_ray(-300.0, 0.0), &planes).unwrap();
        assert_eq!(hit.index, 0);

        assert!(pick(&straight_ray(0.0, 400.0), &planes).is_none());
    }

    #[test]
    fn overlapping_planes_first_wins_at_equal_distance() {
        // Both at z=0: equal t, so the first indexed plane is kept
        let planes = [
            plane_at(0.0, 0.0, 200.0, 150.0),
            plane_at(10.0, 0.0, 200.0, 150.0),
        ];
        let hit = pick(&straight_ray(5.0, 0.0), &planes).unwrap();
        assert_eq!(hit.index, 0);
    }
}
