//! Location cascade: country → state → district → cluster → zone → city
//! (or any other per-screen order, e.g. the warehouse state → cluster → district).
//!
//! The cascade owns the selection and option list of every level. It never
//! performs I/O itself: `select` returns the [`FetchRequest`] the caller has
//! to run, and the result is handed back through `apply_options`. Every
//! request carries a generation number; a response whose generation is no
//! longer current for its level is discarded, so a slow answer for an old
//! parent can never overwrite options loaded for the new one.

use std::collections::BTreeSet;

use thiserror::Error;

use super::level::{LocationLevel, LocationNode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelConfig {
    pub level: LocationLevel,
    /// Checkbox list instead of a single dropdown.
    pub multiple: bool,
}

impl LevelConfig {
    pub fn single(level: LocationLevel) -> Self {
        Self {
            level,
            multiple: false,
        }
    }

    pub fn multiple(level: LocationLevel) -> Self {
        Self {
            level,
            multiple: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    Single(Option<String>),
    Multiple(BTreeSet<String>),
}

impl Selection {
    pub fn one(id: impl Into<String>) -> Self {
        Selection::Single(Some(id.into()))
    }

    pub fn none() -> Self {
        Selection::Single(None)
    }

    pub fn many<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Selection::Multiple(ids.into_iter().map(Into::into).collect())
    }

    pub fn empty_for(multiple: bool) -> Self {
        if multiple {
            Selection::Multiple(BTreeSet::new())
        } else {
            Selection::Single(None)
        }
    }

    pub fn is_multiple(&self) -> bool {
        matches!(self, Selection::Multiple(_))
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Selection::Single(v) => v.is_none(),
            Selection::Multiple(set) => set.is_empty(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        match self {
            Selection::Single(v) => v.as_deref() == Some(id),
            Selection::Multiple(set) => set.contains(id),
        }
    }

    pub fn ids(&self) -> Vec<String> {
        match self {
            Selection::Single(v) => v.iter().cloned().collect(),
            Selection::Multiple(set) => set.iter().cloned().collect(),
        }
    }

    /// Blank ids coming from an empty `<option value="">` count as "nothing selected".
    fn normalized(self) -> Self {
        match self {
            Selection::Single(v) => {
                Selection::Single(v.filter(|id| !id.trim().is_empty()))
            }
            Selection::Multiple(set) => Selection::Multiple(
                set.into_iter().filter(|id| !id.trim().is_empty()).collect(),
            ),
        }
    }
}

/// What happens to deeper levels when a multi-select level changes.
///
/// Single-select levels always reset their descendants. For multi-select
/// levels the dashboard historically kept the descendants, so that stays the
/// default; screens that need strict consistency opt into `ClearDescendants`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MultiSelectPolicy {
    #[default]
    KeepDescendants,
    ClearDescendants,
}

/// One option-list fetch the caller must perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub level: LocationLevel,
    /// Ids of the selected parent(s); empty for the root level.
    pub parent_ids: Vec<String>,
    pub generation: u64,
}

impl FetchRequest {
    /// Value for the `parentId` query parameter (comma separated for multi-select parents).
    pub fn parent_filter(&self) -> Option<String> {
        if self.parent_ids.is_empty() {
            None
        } else {
            Some(self.parent_ids.join(","))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyOutcome {
    /// Options replaced; number of nodes kept.
    Applied(usize),
    /// Fetch failed; the level's options are now empty, selections untouched.
    Failed(String),
    /// Response belongs to a superseded request and was dropped.
    Stale,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CascadeError {
    #[error("location cascade needs at least one level")]
    EmptyLevels,
    #[error("level {0:?} appears more than once")]
    DuplicateLevel(LocationLevel),
    #[error("level {0:?} is not part of this cascade")]
    UnknownLevel(LocationLevel),
    #[error("level {level:?} expects a {expected} selection")]
    SelectionKindMismatch {
        level: LocationLevel,
        expected: &'static str,
    },
}

#[derive(Debug, Clone)]
struct LevelSlot {
    config: LevelConfig,
    selection: Selection,
    options: Vec<LocationNode>,
    generation: u64,
    loading: bool,
}

impl LevelSlot {
    fn new(config: LevelConfig) -> Self {
        Self {
            config,
            selection: Selection::empty_for(config.multiple),
            options: Vec::new(),
            generation: 0,
            loading: false,
        }
    }

    fn reset(&mut self, generation: u64) {
        self.selection = Selection::empty_for(self.config.multiple);
        self.options.clear();
        self.loading = false;
        self.generation = generation;
    }
}

#[derive(Debug, Clone)]
pub struct LocationCascade {
    slots: Vec<LevelSlot>,
    policy: MultiSelectPolicy,
    next_generation: u64,
}

impl LocationCascade {
    pub fn new(levels: &[LevelConfig]) -> Result<Self, CascadeError> {
        if levels.is_empty() {
            return Err(CascadeError::EmptyLevels);
        }
        for (i, config) in levels.iter().enumerate() {
            if levels[..i].iter().any(|c| c.level == config.level) {
                return Err(CascadeError::DuplicateLevel(config.level));
            }
        }
        Ok(Self {
            slots: levels.iter().copied().map(LevelSlot::new).collect(),
            policy: MultiSelectPolicy::default(),
            next_generation: 0,
        })
    }

    /// country → state → district → cluster → zone → city, all single-select.
    pub fn standard() -> Self {
        Self::from_levels(&LocationLevel::ALL)
    }

    /// Warehouse-scoped order used by inventory screens: state → cluster → district.
    pub fn warehouse() -> Self {
        Self::from_levels(&[
            LocationLevel::State,
            LocationLevel::Cluster,
            LocationLevel::District,
        ])
    }

    fn from_levels(levels: &[LocationLevel]) -> Self {
        Self {
            slots: levels
                .iter()
                .map(|l| LevelSlot::new(LevelConfig::single(*l)))
                .collect(),
            policy: MultiSelectPolicy::default(),
            next_generation: 0,
        }
    }

    pub fn with_policy(mut self, policy: MultiSelectPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Switches a level between dropdown and checkbox list. Its selection is reset.
    pub fn with_multiple(mut self, level: LocationLevel, multiple: bool) -> Self {
        if let Some(idx) = self.index_of(level) {
            let slot = &mut self.slots[idx];
            slot.config.multiple = multiple;
            slot.selection = Selection::empty_for(multiple);
        }
        self
    }

    /// Drops every level deeper than `level`. Unknown levels leave the cascade as is.
    pub fn upto(mut self, level: LocationLevel) -> Self {
        if let Some(idx) = self.index_of(level) {
            self.slots.truncate(idx + 1);
        }
        self
    }

    pub fn levels(&self) -> Vec<LocationLevel> {
        self.slots.iter().map(|s| s.config.level).collect()
    }

    pub fn config(&self, level: LocationLevel) -> Option<LevelConfig> {
        self.index_of(level).map(|idx| self.slots[idx].config)
    }

    pub fn selection(&self, level: LocationLevel) -> Option<&Selection> {
        self.index_of(level).map(|idx| &self.slots[idx].selection)
    }

    pub fn selected_ids(&self, level: LocationLevel) -> Vec<String> {
        self.selection(level).map(Selection::ids).unwrap_or_default()
    }

    pub fn options(&self, level: LocationLevel) -> &[LocationNode] {
        match self.index_of(level) {
            Some(idx) => &self.slots[idx].options,
            None => &[],
        }
    }

    pub fn is_loading(&self, level: LocationLevel) -> bool {
        self.index_of(level)
            .map(|idx| self.slots[idx].loading)
            .unwrap_or(false)
    }

    /// The deepest level that has something selected, used as the narrowest filter.
    pub fn deepest_selected(&self) -> Option<(LocationLevel, Vec<String>)> {
        self.slots
            .iter()
            .rev()
            .find(|s| !s.selection.is_empty())
            .map(|s| (s.config.level, s.selection.ids()))
    }

    /// Fetch for the root level's options. The root has no parent filter.
    pub fn initial_request(&mut self) -> FetchRequest {
        let generation = self.bump();
        let root = &mut self.slots[0];
        root.generation = generation;
        root.loading = true;
        FetchRequest {
            level: root.config.level,
            parent_ids: Vec::new(),
            generation,
        }
    }

    /// Sets a level's value and returns the fetch for its immediate child, if any.
    ///
    /// Descendants of a single-select level are reset (multi-select descendants
    /// to an empty set, single-select ones to unset) and their pending fetches
    /// are invalidated. Multi-select levels follow the cascade's
    /// [`MultiSelectPolicy`]. Deeper levels are not fetched here: they load
    /// once their own parent is selected.
    pub fn select(
        &mut self,
        level: LocationLevel,
        selection: Selection,
    ) -> Result<Option<FetchRequest>, CascadeError> {
        let (idx, selection) = self.checked(level, selection)?;
        let multiple = self.slots[idx].config.multiple;
        self.slots[idx].selection = selection;

        let generation = self.bump();
        if !multiple || self.policy == MultiSelectPolicy::ClearDescendants {
            for slot in self.slots[idx + 1..].iter_mut() {
                slot.reset(generation);
            }
        }

        let parent_ids = self.slots[idx].selection.ids();
        let Some(child) = self.slots.get_mut(idx + 1) else {
            return Ok(None);
        };
        child.generation = generation;
        if parent_ids.is_empty() {
            child.options.clear();
            child.loading = false;
            return Ok(None);
        }
        child.loading = true;
        Ok(Some(FetchRequest {
            level: child.config.level,
            parent_ids,
            generation,
        }))
    }

    /// Hands a finished fetch back to the cascade.
    pub fn apply_options(
        &mut self,
        request: &FetchRequest,
        result: Result<Vec<LocationNode>, String>,
    ) -> ApplyOutcome {
        let Some(idx) = self.index_of(request.level) else {
            return ApplyOutcome::Stale;
        };
        let slot = &mut self.slots[idx];
        if slot.generation != request.generation {
            return ApplyOutcome::Stale;
        }
        slot.loading = false;
        match result {
            Ok(nodes) => {
                let nodes: Vec<LocationNode> = nodes
                    .into_iter()
                    .filter(|node| {
                        request.parent_ids.is_empty()
                            || node
                                .parent_id
                                .as_ref()
                                .map_or(true, |p| request.parent_ids.contains(p))
                    })
                    .collect();
                let count = nodes.len();
                slot.options = nodes;
                ApplyOutcome::Applied(count)
            }
            Err(message) => {
                slot.options.clear();
                ApplyOutcome::Failed(message)
            }
        }
    }

    /// Seeds selections (e.g. when an existing record is opened for editing)
    /// without any descendant reset, and returns one fetch per level whose
    /// options are now resolvable: the root plus every level with a selected parent.
    ///
    /// Every entry is checked before any is written; on error nothing changes.
    pub fn preset<I>(&mut self, values: I) -> Result<Vec<FetchRequest>, CascadeError>
    where
        I: IntoIterator<Item = (LocationLevel, Selection)>,
    {
        let checked = values
            .into_iter()
            .map(|(level, selection)| self.checked(level, selection))
            .collect::<Result<Vec<_>, _>>()?;
        for (idx, selection) in checked {
            self.slots[idx].selection = selection;
        }

        let mut requests = vec![self.initial_request()];
        let generation = self.bump();
        for idx in 1..self.slots.len() {
            let parent_ids = self.slots[idx - 1].selection.ids();
            let slot = &mut self.slots[idx];
            slot.generation = generation;
            if parent_ids.is_empty() {
                slot.loading = false;
                continue;
            }
            slot.loading = true;
            requests.push(FetchRequest {
                level: slot.config.level,
                parent_ids,
                generation,
            });
        }
        Ok(requests)
    }

    /// Clears every selection and all non-root option lists.
    pub fn clear(&mut self) {
        let generation = self.bump();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            if idx == 0 {
                slot.selection = Selection::empty_for(slot.config.multiple);
            } else {
                slot.reset(generation);
            }
        }
    }

    fn checked(
        &self,
        level: LocationLevel,
        selection: Selection,
    ) -> Result<(usize, Selection), CascadeError> {
        let idx = self
            .index_of(level)
            .ok_or(CascadeError::UnknownLevel(level))?;
        let selection = selection.normalized();
        let multiple = self.slots[idx].config.multiple;
        if selection.is_multiple() != multiple {
            return Err(CascadeError::SelectionKindMismatch {
                level,
                expected: if multiple { "multiple" } else { "single" },
            });
        }
        Ok((idx, selection))
    }

    fn index_of(&self, level: LocationLevel) -> Option<usize> {
        self.slots.iter().position(|s| s.config.level == level)
    }

    fn bump(&mut self) -> u64 {
        self.next_generation += 1;
        self.next_generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LocationLevel::*;

    fn node(id: &str, parent: &str) -> LocationNode {
        LocationNode::new(id, id.to_uppercase(), Some(parent))
    }

    fn fully_selected_standard() -> LocationCascade {
        let mut cascade = LocationCascade::standard();
        cascade
            .preset(LocationLevel::ALL.map(|l| (l, Selection::one(format!("{}-1", l.key())))))
            .unwrap();
        cascade
    }

    #[test]
    fn test_single_select_clears_every_descendant() {
        for (i, level) in LocationLevel::ALL.iter().enumerate() {
            let mut cascade = fully_selected_standard();
            cascade.select(*level, Selection::one("changed")).unwrap();

            for (j, other) in LocationLevel::ALL.iter().enumerate() {
                let selection = cascade.selection(*other).unwrap();
                if j < i {
                    assert!(!selection.is_empty(), "{other:?} should be kept");
                } else if j == i {
                    assert_eq!(selection, &Selection::one("changed"));
                } else {
                    assert!(selection.is_empty(), "{other:?} should be cleared");
                    if j > i + 1 {
                        assert!(cascade.options(*other).is_empty());
                    }
                }
            }
        }
    }

    #[test]
    fn test_select_requests_exactly_the_child() {
        let levels = LocationLevel::ALL;
        for i in 0..levels.len() {
            let mut cascade = LocationCascade::standard();
            let request = cascade.select(levels[i], Selection::one("p-1")).unwrap();
            match levels.get(i + 1) {
                Some(child) => {
                    let request = request.expect("child fetch");
                    assert_eq!(request.level, *child);
                    assert_eq!(request.parent_ids, vec!["p-1".to_string()]);
                    assert_eq!(request.parent_filter().as_deref(), Some("p-1"));
                    assert!(cascade.is_loading(*child));
                }
                None => assert!(request.is_none()),
            }
        }
    }

    #[test]
    fn test_gujarat_surat_then_maharashtra() {
        let mut cascade = LocationCascade::warehouse();
        let root = cascade.initial_request();
        assert_eq!(root.level, State);
        assert_eq!(root.parent_filter(), None);
        cascade.apply_options(
            &root,
            Ok(vec![
                LocationNode::new("gj", "Gujarat", None),
                LocationNode::new("mh", "Maharashtra", None),
            ]),
        );

        let clusters = cascade.select(State, Selection::one("gj")).unwrap().unwrap();
        assert_eq!(
            cascade.apply_options(&clusters, Ok(vec![node("surat", "gj")])),
            ApplyOutcome::Applied(1)
        );
        let districts = cascade
            .select(Cluster, Selection::one("surat"))
            .unwrap()
            .unwrap();
        cascade.apply_options(&districts, Ok(vec![node("choryasi", "surat")]));
        cascade
            .select(District, Selection::one("choryasi"))
            .unwrap();

        let request = cascade.select(State, Selection::one("mh")).unwrap().unwrap();

        assert!(cascade.selection(Cluster).unwrap().is_empty());
        assert!(cascade.selection(District).unwrap().is_empty());
        assert!(cascade.options(District).is_empty());
        assert_eq!(request.level, Cluster);
        assert_eq!(request.parent_ids, vec!["mh".to_string()]);
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut cascade = LocationCascade::standard();
        let first = cascade.select(Country, Selection::one("in")).unwrap().unwrap();
        let second = cascade.select(Country, Selection::one("np")).unwrap().unwrap();

        assert_eq!(
            cascade.apply_options(&second, Ok(vec![node("bagmati", "np")])),
            ApplyOutcome::Applied(1)
        );
        assert_eq!(
            cascade.apply_options(&first, Ok(vec![node("gj", "in"), node("mh", "in")])),
            ApplyOutcome::Stale
        );
        let names: Vec<&str> = cascade.options(State).iter().map(|n| n.id.as_str()).collect();
        assert_eq!(names, vec!["bagmati"]);
    }

    #[test]
    fn test_grandchild_fetch_invalidated_by_ancestor_change() {
        let mut cascade = LocationCascade::warehouse();
        let clusters = cascade.select(State, Selection::one("gj")).unwrap().unwrap();
        cascade.apply_options(&clusters, Ok(vec![node("surat", "gj")]));
        let districts = cascade
            .select(Cluster, Selection::one("surat"))
            .unwrap()
            .unwrap();

        cascade.select(State, Selection::one("mh")).unwrap();

        assert_eq!(
            cascade.apply_options(&districts, Ok(vec![node("choryasi", "surat")])),
            ApplyOutcome::Stale
        );
        assert!(cascade.options(District).is_empty());
        assert!(!cascade.is_loading(District));
    }

    #[test]
    fn test_failed_fetch_empties_options_and_keeps_selection() {
        let mut cascade = LocationCascade::warehouse();
        let request = cascade.select(State, Selection::one("gj")).unwrap().unwrap();
        let outcome = cascade.apply_options(&request, Err("timeout".to_string()));

        assert_eq!(outcome, ApplyOutcome::Failed("timeout".to_string()));
        assert!(cascade.options(Cluster).is_empty());
        assert!(!cascade.is_loading(Cluster));
        assert_eq!(cascade.selection(State), Some(&Selection::one("gj")));
    }

    #[test]
    fn test_options_with_foreign_parent_are_dropped() {
        let mut cascade = LocationCascade::warehouse();
        let request = cascade.select(State, Selection::one("gj")).unwrap().unwrap();
        let outcome = cascade.apply_options(
            &request,
            Ok(vec![
                node("surat", "gj"),
                node("pune", "mh"),
                LocationNode::new("vadodara", "Vadodara", None),
            ]),
        );
        assert_eq!(outcome, ApplyOutcome::Applied(2));
    }

    #[test]
    fn test_clearing_a_level_fetches_nothing() {
        let mut cascade = LocationCascade::warehouse();
        let request = cascade.select(State, Selection::one("gj")).unwrap().unwrap();
        cascade.apply_options(&request, Ok(vec![node("surat", "gj")]));

        let request = cascade.select(State, Selection::Single(Some(String::new()))).unwrap();
        assert!(request.is_none());
        assert!(cascade.selection(State).unwrap().is_empty());
        assert!(cascade.options(Cluster).is_empty());
    }

    #[test]
    fn test_multi_select_keeps_descendants_by_default() {
        let mut cascade = LocationCascade::warehouse().with_multiple(State, true);
        let request = cascade
            .select(State, Selection::many(["gj", "mh"]))
            .unwrap()
            .unwrap();
        assert_eq!(request.parent_filter().as_deref(), Some("gj,mh"));
        cascade.apply_options(&request, Ok(vec![node("surat", "gj"), node("pune", "mh")]));
        cascade.select(Cluster, Selection::one("surat")).unwrap();

        cascade.select(State, Selection::many(["mh"])).unwrap();
        assert_eq!(cascade.selection(Cluster), Some(&Selection::one("surat")));
    }

    #[test]
    fn test_multi_select_clear_policy() {
        let mut cascade = LocationCascade::warehouse()
            .with_multiple(State, true)
            .with_multiple(District, true)
            .with_policy(MultiSelectPolicy::ClearDescendants);
        cascade
            .preset([
                (State, Selection::many(["gj"])),
                (Cluster, Selection::one("surat")),
                (District, Selection::many(["choryasi", "olpad"])),
            ])
            .unwrap();

        cascade.select(State, Selection::many(["mh"])).unwrap();
        assert_eq!(cascade.selection(Cluster), Some(&Selection::none()));
        assert_eq!(
            cascade.selection(District),
            Some(&Selection::Multiple(BTreeSet::new()))
        );
    }

    #[test]
    fn test_single_parent_resets_multi_descendant_to_empty_set() {
        let mut cascade = LocationCascade::warehouse().with_multiple(District, true);
        cascade
            .preset([
                (State, Selection::one("gj")),
                (Cluster, Selection::one("surat")),
                (District, Selection::many(["choryasi"])),
            ])
            .unwrap();
        cascade.select(Cluster, Selection::one("navsari")).unwrap();
        assert_eq!(
            cascade.selection(District),
            Some(&Selection::Multiple(BTreeSet::new()))
        );
    }

    #[test]
    fn test_selection_kind_mismatch() {
        let mut cascade = LocationCascade::warehouse();
        let err = cascade
            .select(State, Selection::many(["gj"]))
            .unwrap_err();
        assert_eq!(
            err,
            CascadeError::SelectionKindMismatch {
                level: State,
                expected: "single"
            }
        );
    }

    #[test]
    fn test_upto_truncates_levels() {
        let mut cascade = LocationCascade::standard().upto(District);
        assert_eq!(cascade.levels(), vec![Country, State, District]);
        assert!(cascade.select(District, Selection::one("x")).unwrap().is_none());
        assert_eq!(
            cascade.select(City, Selection::one("x")).unwrap_err(),
            CascadeError::UnknownLevel(City)
        );
    }

    #[test]
    fn test_constructor_validation() {
        assert_eq!(
            LocationCascade::new(&[]).unwrap_err(),
            CascadeError::EmptyLevels
        );
        assert_eq!(
            LocationCascade::new(&[LevelConfig::single(State), LevelConfig::multiple(State)])
                .unwrap_err(),
            CascadeError::DuplicateLevel(State)
        );
        let cascade =
            LocationCascade::new(&[LevelConfig::single(State), LevelConfig::multiple(Zone)])
                .unwrap();
        assert_eq!(cascade.config(Zone), Some(LevelConfig::multiple(Zone)));
    }

    #[test]
    fn test_preset_requests_resolvable_levels() {
        let mut cascade = LocationCascade::warehouse();
        let requests = cascade
            .preset([(State, Selection::one("gj")), (Cluster, Selection::one("surat"))])
            .unwrap();
        let levels: Vec<LocationLevel> = requests.iter().map(|r| r.level).collect();
        assert_eq!(levels, vec![State, Cluster, District]);
        assert_eq!(requests[2].parent_ids, vec!["surat".to_string()]);
        assert_eq!(
            cascade.deepest_selected(),
            Some((Cluster, vec!["surat".to_string()]))
        );
    }

    #[test]
    fn test_clear_resets_everything_but_root_options() {
        let mut cascade = LocationCascade::warehouse();
        let root = cascade.initial_request();
        cascade.apply_options(&root, Ok(vec![LocationNode::new("gj", "Gujarat", None)]));
        let request = cascade.select(State, Selection::one("gj")).unwrap().unwrap();
        cascade.apply_options(&request, Ok(vec![node("surat", "gj")]));

        cascade.clear();
        assert_eq!(cascade.deepest_selected(), None);
        assert_eq!(cascade.options(State).len(), 1);
        assert!(cascade.options(Cluster).is_empty());
        assert_eq!(cascade.options(State)[0].name, "Gujarat");
    }

    #[test]
    fn test_failed_preset_leaves_selections_untouched() {
        let mut cascade = LocationCascade::warehouse();
        assert_eq!(
            cascade
                .preset([(State, Selection::one("gj")), (City, Selection::one("x"))])
                .unwrap_err(),
            CascadeError::UnknownLevel(City)
        );
        assert!(cascade.selection(State).unwrap().is_empty());

        let mut cascade = LocationCascade::warehouse();
        assert!(cascade
            .preset([
                (State, Selection::one("gj")),
                (Cluster, Selection::many(["surat"])),
            ])
            .is_err());
        assert_eq!(cascade.deepest_selected(), None);
    }
}
