// Proptest generators for domain types.

use proptest::prelude::*;

use crate::domain::point_type::PointType;
use crate::domain::roster::Side;

pub fn side() -> impl Strategy<Value = Side> {
    prop_oneof![Just(Side::Home), Just(Side::Away)]
}

pub fn point_type() -> impl Strategy<Value = PointType> {
    prop_oneof![
        Just(PointType::Spike),
        Just(PointType::Block),
        Just(PointType::Ace),
        Just(PointType::OpponentError),
    ]
}

/// One intent a host could send; weights favour points so sets finish.
#[derive(Debug, Clone, Copy)]
pub enum Intent {
    Point {
        side: Side,
        slot: usize,
        point_type: PointType,
        attributed: bool,
    },
    Undo,
    NextSet,
    Timeout(Side),
    Suspend,
    Resume,
}

pub fn intent() -> impl Strategy<Value = Intent> {
    prop_oneof![
        12 => (side(), 0usize..6, point_type(), any::<bool>()).prop_map(
            |(side, slot, point_type, attributed)| Intent::Point {
                side,
                slot,
                point_type,
                attributed,
            }
        ),
        3 => Just(Intent::Undo),
        2 => Just(Intent::NextSet),
        1 => side().prop_map(Intent::Timeout),
        1 => Just(Intent::Suspend),
        1 => Just(Intent::Resume),
    ]
}

pub fn intents(max: usize) -> impl Strategy<Value = Vec<Intent>> {
    prop::collection::vec(intent(), 0..max)
}

/// Rally winners only, for straight-line scoring.
pub fn rally_winners(max: usize) -> impl Strategy<Value = Vec<Side>> {
    prop::collection::vec(side(), 0..max)
}
