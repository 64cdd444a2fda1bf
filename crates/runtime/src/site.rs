//! Budding sources and the six sites around them.

use crystal_core::GrowthStage;

/// Face of a budding source a site is attached to.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumIter,
    strum::AsRefStr,
    strum::FromRepr,
)]
#[strum(serialize_all = "snake_case")]
#[repr(u8)]
pub enum Direction {
    Down,
    Up,
    North,
    South,
    West,
    East,
}

impl Direction {
    pub const COUNT: usize = 6;

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// One cell next to a budding source.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Site {
    pub stage: GrowthStage,
    /// Space is occupied by something other than a bud, so nothing can grow.
    pub obstructed: bool,
}

/// A budding block of one formation with its six neighbouring sites.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuddingSource {
    set_id: String,
    sites: [Site; Direction::COUNT],
}

impl BuddingSource {
    pub fn new(set_id: impl Into<String>) -> Self {
        Self {
            set_id: set_id.into(),
            sites: [Site::default(); Direction::COUNT],
        }
    }

    pub fn set_id(&self) -> &str {
        &self.set_id
    }

    pub fn site(&self, face: Direction) -> &Site {
        &self.sites[face.index()]
    }

    pub fn site_mut(&mut self, face: Direction) -> &mut Site {
        &mut self.sites[face.index()]
    }

    pub fn set_obstructed(&mut self, face: Direction, obstructed: bool) {
        self.site_mut(face).obstructed = obstructed;
    }

    /// Faces currently holding a fully grown cluster.
    pub fn clusters(&self) -> impl Iterator<Item = Direction> + '_ {
        self.sites
            .iter()
            .enumerate()
            .filter(|(_, site)| site.stage.is_terminal())
            .filter_map(|(i, _)| Direction::from_repr(i as u8))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn directions_index_their_sites() {
        for (i, face) in Direction::iter().enumerate() {
            assert_eq!(face.index(), i);
            assert_eq!(Direction::from_repr(i as u8), Some(face));
        }
        assert_eq!(Direction::iter().count(), Direction::COUNT);
    }

    #[test]
    fn new_source_has_empty_sites() {
        let source = BuddingSource::new("diamond");
        assert!(Direction::iter().all(|face| *source.site(face) == Site::default()));
        assert_eq!(source.clusters().count(), 0);
    }

    #[test]
    fn clusters_lists_grown_faces() {
        let mut source = BuddingSource::new("diamond");
        source.site_mut(Direction::Up).stage = GrowthStage::Cluster;
        source.site_mut(Direction::East).stage = GrowthStage::Large;
        assert_eq!(source.clusters().collect::<Vec<_>>(), vec![Direction::Up]);
    }
}
