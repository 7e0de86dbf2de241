//! Collision detection between the vehicle, the floor and obstacle bands
//!
//! All shapes are axis-aligned rectangles in screen space (y grows downward).

use super::state::{Obstacle, Vehicle};

/// Result of testing the vehicle against one obstacle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateCheck {
    /// No horizontal overlap
    Clear,
    /// Overlapping, fully inside the gate
    Threading,
    /// Overlapping and touching a solid band
    Hit,
}

impl GateCheck {
    #[inline]
    pub fn is_hit(self) -> bool {
        self == GateCheck::Hit
    }
}

/// Horizontal extents overlap (open intervals: touching edges don't count)
#[inline]
pub fn overlaps_horizontally(vehicle: &Vehicle, obstacle: &Obstacle) -> bool {
    let (left, right) = (vehicle.x as f64, (vehicle.x + vehicle.width) as f64);
    left < obstacle.right() && right > obstacle.x
}

/// Vehicle lies within [height, height + gap] (edges inclusive)
#[inline]
pub fn within_gate(vehicle: &Vehicle, obstacle: &Obstacle) -> bool {
    let (top, bottom) = (vehicle.y as f64, (vehicle.y + vehicle.height) as f64);
    top >= obstacle.height && bottom <= obstacle.gate_bottom()
}

/// Test the vehicle against an obstacle's two solid bands
pub fn check_gate(vehicle: &Vehicle, obstacle: &Obstacle) -> GateCheck {
    if !overlaps_horizontally(vehicle, obstacle) {
        GateCheck::Clear
    } else if within_gate(vehicle, obstacle) {
        GateCheck::Threading
    } else {
        GateCheck::Hit
    }
}

/// Vehicle bottom below the floor. There is no matching ceiling check: the
/// top edge clamps instead.
#[inline]
pub fn breaches_floor(vehicle: &Vehicle, viewport_height: f32) -> bool {
    vehicle.y + vehicle.height > viewport_height
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle(y: f32) -> Vehicle {
        Vehicle {
            x: 50.0,
            y,
            width: 40.0,
            height: 30.0,
            velocity: 0.0,
            gravity: 0.3,
            lift: -8.0,
        }
    }

    fn obstacle(x: f64, height: f64, gap: f64) -> Obstacle {
        Obstacle {
            x,
            width: 40.0,
            height,
            gap,
        }
    }

    #[test]
    fn test_no_overlap_is_clear() {
        // Far right of the vehicle, even though vehicle is above the gate
        let obs = obstacle(200.0, 400.0, 100.0);
        assert_eq!(check_gate(&vehicle(10.0), &obs), GateCheck::Clear);
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let v = vehicle(10.0);
        // Obstacle starts exactly at vehicle right edge
        assert!(!overlaps_horizontally(&v, &obstacle(90.0, 400.0, 100.0)));
        // Obstacle ends exactly at vehicle left edge
        assert!(!overlaps_horizontally(&v, &obstacle(10.0, 400.0, 100.0)));
        assert!(overlaps_horizontally(&v, &obstacle(89.9, 400.0, 100.0)));
    }

    #[test]
    fn test_inside_gate_threads() {
        let obs = obstacle(60.0, 200.0, 270.0);
        assert_eq!(check_gate(&vehicle(300.0), &obs), GateCheck::Threading);
        // Exactly on both gate edges is still inside
        assert_eq!(check_gate(&vehicle(200.0), &obs), GateCheck::Threading);
        assert_eq!(check_gate(&vehicle(440.0), &obs), GateCheck::Threading);
    }

    #[test]
    fn test_top_band_hit() {
        let obs = obstacle(60.0, 200.0, 270.0);
        assert!(check_gate(&vehicle(199.0), &obs).is_hit());
    }

    #[test]
    fn test_bottom_band_hit() {
        let obs = obstacle(60.0, 200.0, 270.0);
        assert!(check_gate(&vehicle(441.0), &obs).is_hit());
    }

    #[test]
    fn test_floor_breach() {
        assert!(!breaches_floor(&vehicle(570.0), 600.0));
        assert!(breaches_floor(&vehicle(570.5), 600.0));
        assert!(breaches_floor(&vehicle(595.0), 600.0));
    }
}
