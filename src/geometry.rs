//! Room geometry: floor areas, volumes, and simple roster queries.

/// A rectangular room described by its interior dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Room label (e.g., "Kitchen").
    pub name: String,
    /// Interior length (m).
    pub length_m: f64,
    /// Interior width (m).
    pub width_m: f64,
    /// Floor-to-ceiling height (m).
    pub height_m: f64,
}

impl Room {
    /// Creates a room from its interior dimensions.
    pub fn new(name: &str, length_m: f64, width_m: f64, height_m: f64) -> Self {
        Self {
            name: name.to_string(),
            length_m,
            width_m,
            height_m,
        }
    }

    /// Floor area (m²).
    pub fn floor_area_m2(&self) -> f64 {
        self.length_m * self.width_m
    }

    /// Interior volume (m³).
    pub fn volume_m3(&self) -> f64 {
        self.length_m * self.width_m * self.height_m
    }
}

/// Sum of floor areas over a room roster (m²).
pub fn total_floor_area(rooms: &[Room]) -> f64 {
    rooms.iter().map(Room::floor_area_m2).sum()
}

/// Rooms whose floor area strictly exceeds `min_area_m2`.
pub fn rooms_larger_than(rooms: &[Room], min_area_m2: f64) -> Vec<&Room> {
    rooms
        .iter()
        .filter(|r| r.floor_area_m2() > min_area_m2)
        .collect()
}

/// Sorts a roster by floor area, smallest first.
pub fn sort_by_area(rooms: &mut [Room]) {
    rooms.sort_by(|a, b| a.floor_area_m2().total_cmp(&b.floor_area_m2()));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Room> {
        vec![
            Room::new("Living", 5.0, 5.0, 2.8),
            Room::new("Kitchen", 6.0, 3.0, 2.8),
            Room::new("Study", 3.0, 3.0, 2.8),
            Room::new("Bedroom", 5.0, 3.0, 2.8),
        ]
    }

    #[test]
    fn area_and_volume() {
        let r = Room::new("Test", 5.0, 3.0, 2.8);
        assert_eq!(r.floor_area_m2(), 15.0);
        assert!((r.volume_m3() - 42.0).abs() < 1e-9);
    }

    #[test]
    fn total_area_sums_roster() {
        // 25 + 18 + 9 + 15
        assert_eq!(total_floor_area(&roster()), 67.0);
    }

    #[test]
    fn larger_than_filters_strictly() {
        let rooms = roster();
        let large = rooms_larger_than(&rooms, 15.0);
        let names: Vec<&str> = large.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["Living", "Kitchen"]);
    }

    #[test]
    fn sort_is_ascending() {
        let mut rooms = roster();
        sort_by_area(&mut rooms);
        let areas: Vec<f64> = rooms.iter().map(Room::floor_area_m2).collect();
        assert_eq!(areas, vec![9.0, 15.0, 18.0, 25.0]);
    }

    #[test]
    fn empty_roster_total_is_zero() {
        assert_eq!(total_floor_area(&[]), 0.0);
    }
}
