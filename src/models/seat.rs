use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use crate::constants::SEATS_PER_ROW;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatStatus {
    Available,
    Occupied,
    Selected,
}

impl SeatStatus {
    #[must_use]
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Available => "seat available",
            Self::Occupied => "seat occupied",
            Self::Selected => "seat selected",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::Occupied => "Occupied",
            Self::Selected => "Selected",
        }
    }
}

/// Seat numbers already booked for one route and travel time
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OccupiedSeats(BTreeSet<u32>);

impl OccupiedSeats {
    #[must_use]
    pub fn contains(&self, seat: u32) -> bool {
        self.0.contains(&seat)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Status of `seat` given the current selection
    #[must_use]
    pub fn status_of(&self, seat: u32, selected: Option<u32>) -> SeatStatus {
        if selected == Some(seat) {
            SeatStatus::Selected
        } else if self.contains(seat) {
            SeatStatus::Occupied
        } else {
            SeatStatus::Available
        }
    }
}

impl FromIterator<u32> for OccupiedSeats {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One row of the bus: a window/aisle pair on each side of the aisle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatRow {
    pub number: u32,
    pub left: Vec<u32>,
    pub right: Vec<u32>,
}

impl SeatRow {
    pub fn seats(&self) -> impl Iterator<Item = u32> + '_ {
        self.left.iter().chain(self.right.iter()).copied()
    }
}

/// Lays seats `1..=capacity` out four to a row.
///
/// When the capacity is not a multiple of four the last row is partial.
#[must_use]
pub fn seat_rows(capacity: u32) -> Vec<SeatRow> {
    let half = SEATS_PER_ROW / 2;
    let row_count = capacity.div_ceil(SEATS_PER_ROW);

    (1..=row_count)
        .map(|row| {
            let first = (row - 1) * SEATS_PER_ROW + 1;
            let in_row = |offset: u32| {
                let seat = first + offset;
                (seat <= capacity).then_some(seat)
            };
            SeatRow {
                number: row,
                left: (0..half).filter_map(in_row).collect(),
                right: (half..SEATS_PER_ROW).filter_map(in_row).collect(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rows_contain_every_seat_exactly_once() {
        for capacity in [4, 8, 20, 32, 40, 52] {
            let rows = seat_rows(capacity);
            let seats: Vec<u32> = rows.iter().flat_map(SeatRow::seats).collect();
            let unique: HashSet<u32> = seats.iter().copied().collect();

            assert_eq!(rows.len() as u32, capacity / 4);
            assert_eq!(seats.len() as u32, capacity);
            assert_eq!(unique.len() as u32, capacity);
            assert!(seats.iter().all(|&s| (1..=capacity).contains(&s)));
        }
    }

    #[test]
    fn test_row_numbering_splits_at_aisle() {
        let rows = seat_rows(8);
        assert_eq!(rows[0].left, vec![1, 2]);
        assert_eq!(rows[0].right, vec![3, 4]);
        assert_eq!(rows[1].left, vec![5, 6]);
        assert_eq!(rows[1].right, vec![7, 8]);
    }

    #[test]
    fn test_partial_last_row() {
        let rows = seat_rows(10);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[2].left, vec![9, 10]);
        assert!(rows[2].right.is_empty());
    }

    #[test]
    fn test_zero_capacity_has_no_rows() {
        assert!(seat_rows(0).is_empty());
    }

    #[test]
    fn test_occupied_seats_from_json_array() {
        let occupied: OccupiedSeats = serde_json::from_str("[3, 1, 2, 2]").expect("valid json");
        assert_eq!(occupied.len(), 3);
        assert!(occupied.contains(1));
        assert!(!occupied.contains(4));
    }

    #[test]
    fn test_status_of() {
        let occupied: OccupiedSeats = [1, 2, 3].into_iter().collect();

        assert_eq!(occupied.status_of(2, None), SeatStatus::Occupied);
        assert_eq!(occupied.status_of(4, None), SeatStatus::Available);
        assert_eq!(occupied.status_of(4, Some(4)), SeatStatus::Selected);
        assert_eq!(occupied.status_of(5, Some(4)), SeatStatus::Available);
    }
}
