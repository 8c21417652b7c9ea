//! Named, observable list of abilities.
//!
//! A [`BattleList`] is what the operator curates in an editor and what the
//! decision loop walks each tick. Edits notify subscribed listeners so a
//! display can refresh; evaluation only ever borrows the list immutably.

use core::fmt;

use super::config::{AbilityConfig, AbilityFields};
use crate::error::{FilterError, ListError};
use crate::filter;
use crate::stats::ResourceSnapshot;

/// Name given to the placeholder ability a new list starts with.
pub const DEFAULT_ABILITY_NAME: &str = "Default";

/// Change notification sent to list listeners.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ListEvent {
    /// An ability was inserted at `index`.
    Added { index: usize },
    /// The ability at `index` was removed.
    Removed { index: usize },
    /// The ability at `index` was edited.
    Changed { index: usize, fields: AbilityFields },
    /// The list itself was renamed.
    Renamed,
}

/// Handle returned by [`BattleList::subscribe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&ListEvent) + Send + Sync>;

/// Listener registry. Not cloned or serialized with the list.
#[derive(Default)]
struct Listeners {
    next_id: u64,
    entries: Vec<(SubscriptionId, Listener)>,
}

impl Listeners {
    fn notify(&self, event: ListEvent) {
        for (_, listener) in &self.entries {
            listener(&event);
        }
    }
}

impl Clone for Listeners {
    fn clone(&self) -> Self {
        Self::default()
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}

/// A named list of abilities evaluated in order.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleList {
    name: String,

    #[cfg_attr(feature = "serde", serde(default))]
    actions: Vec<AbilityConfig>,

    #[cfg_attr(feature = "serde", serde(skip))]
    listeners: Listeners,
}

impl BattleList {
    /// New list seeded with a single disabled placeholder named `"Default"`.
    pub fn new(name: impl Into<String>) -> Self {
        let placeholder = AbilityConfig {
            name: DEFAULT_ABILITY_NAME.to_string(),
            ..AbilityConfig::default()
        };
        Self::with_actions(name, vec![placeholder])
    }

    pub fn with_actions(name: impl Into<String>, actions: Vec<AbilityConfig>) -> Self {
        Self {
            name: name.into(),
            actions,
            listeners: Listeners::default(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn actions(&self) -> &[AbilityConfig] {
        &self.actions
    }

    pub fn get(&self, index: usize) -> Option<&AbilityConfig> {
        self.actions.get(index)
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbilityConfig> {
        self.actions.iter()
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    // ===== observers =====

    /// Register a listener for every subsequent edit.
    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&ListEvent) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.listeners.next_id);
        self.listeners.next_id += 1;
        self.listeners.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false if `id` was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.entries.len();
        self.listeners.entries.retain(|(entry, _)| *entry != id);
        self.listeners.entries.len() != before
    }

    // ===== edits =====

    pub fn rename(&mut self, name: impl Into<String>) {
        let name = name.into();
        if self.name != name {
            self.name = name;
            self.listeners.notify(ListEvent::Renamed);
        }
    }

    /// Append an ability, returning its index.
    pub fn push(&mut self, ability: AbilityConfig) -> usize {
        let index = self.actions.len();
        self.actions.push(ability);
        self.listeners.notify(ListEvent::Added { index });
        index
    }

    pub fn insert(&mut self, index: usize, ability: AbilityConfig) -> Result<(), ListError> {
        let len = self.actions.len();
        if index > len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        self.actions.insert(index, ability);
        self.listeners.notify(ListEvent::Added { index });
        Ok(())
    }

    pub fn remove(&mut self, index: usize) -> Result<AbilityConfig, ListError> {
        let len = self.actions.len();
        if index >= len {
            return Err(ListError::IndexOutOfRange { index, len });
        }
        let removed = self.actions.remove(index);
        self.listeners.notify(ListEvent::Removed { index });
        Ok(removed)
    }

    /// Edit the ability at `index` in place.
    ///
    /// Listeners receive a [`ListEvent::Changed`] only if some field actually
    /// changed; the changed fields are also returned.
    pub fn update<F>(&mut self, index: usize, edit: F) -> Result<AbilityFields, ListError>
    where
        F: FnOnce(&mut AbilityConfig),
    {
        let len = self.actions.len();
        let ability = self
            .actions
            .get_mut(index)
            .ok_or(ListError::IndexOutOfRange { index, len })?;

        let before = ability.clone();
        edit(ability);
        let fields = AbilityFields::diff(&before, ability);

        if !fields.is_empty() {
            self.listeners.notify(ListEvent::Changed { index, fields });
        }
        Ok(fields)
    }

    // ===== evaluation =====

    /// Every ability usable against `snapshot`, in list order.
    ///
    /// A missing snapshot fails the whole call as soon as any candidate reaches
    /// a resource check.
    pub fn usable<'a>(
        &'a self,
        snapshot: Option<&ResourceSnapshot>,
    ) -> Result<Vec<(usize, &'a AbilityConfig)>, FilterError> {
        let mut usable = Vec::new();
        for (index, ability) in self.actions.iter().enumerate() {
            if filter::is_usable(snapshot, ability)? {
                usable.push((index, ability));
            }
        }
        Ok(usable)
    }

    /// First ability usable against `snapshot`, in list order.
    pub fn first_usable<'a>(
        &'a self,
        snapshot: Option<&ResourceSnapshot>,
    ) -> Result<Option<(usize, &'a AbilityConfig)>, FilterError> {
        for (index, ability) in self.actions.iter().enumerate() {
            if filter::is_usable(snapshot, ability)? {
                tracing::debug!(list = %self.name, index, ability = %ability.name, "selected ability");
                return Ok(Some((index, ability)));
            }
        }
        tracing::debug!(list = %self.name, candidates = self.actions.len(), "no usable ability");
        Ok(None)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    fn recording(list: &mut BattleList) -> (SubscriptionId, Arc<Mutex<Vec<ListEvent>>>) {
        let events = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&events);
        let id = list.subscribe(move |event| sink.lock().unwrap().push(*event));
        (id, events)
    }

    #[test]
    fn new_list_has_disabled_default_placeholder() {
        let list = BattleList::new("Buffs");
        assert_eq!(list.name(), "Buffs");
        assert_eq!(list.len(), 1);

        let placeholder = list.get(0).unwrap();
        assert_eq!(placeholder.name, DEFAULT_ABILITY_NAME);
        assert!(!placeholder.is_enabled);
    }

    #[test]
    fn edits_notify_listeners() {
        let mut list = BattleList::new("Buffs");
        let (_, events) = recording(&mut list);

        let index = list.push(AbilityConfig::new("Protect"));
        list.insert(0, AbilityConfig::new("Shell")).unwrap();
        list.update(index + 1, |a| a.mp_cost = 9).unwrap();
        list.remove(1).unwrap();
        list.rename("Pulling");

        assert_eq!(
            *events.lock().unwrap(),
            vec![
                ListEvent::Added { index: 1 },
                ListEvent::Added { index: 0 },
                ListEvent::Changed {
                    index: 2,
                    fields: AbilityFields::MP_COST
                },
                ListEvent::Removed { index: 1 },
                ListEvent::Renamed,
            ]
        );
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(1).unwrap().name, "Protect");
    }

    #[test]
    fn no_op_edits_are_silent() {
        let mut list = BattleList::new("Buffs");
        let (_, events) = recording(&mut list);

        let fields = list.update(0, |a| a.mp_cost = 0).unwrap();
        list.rename("Buffs");

        assert!(fields.is_empty());
        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn unsubscribed_listener_stops_receiving() {
        let mut list = BattleList::new("Buffs");
        let (id, events) = recording(&mut list);

        assert!(list.unsubscribe(id));
        assert!(!list.unsubscribe(id));
        list.push(AbilityConfig::new("Haste"));

        assert!(events.lock().unwrap().is_empty());
    }

    #[test]
    fn out_of_range_edits_are_rejected() {
        let mut list = BattleList::with_actions("Empty", Vec::new());

        assert_eq!(
            list.remove(0),
            Err(ListError::IndexOutOfRange { index: 0, len: 0 })
        );
        assert_eq!(
            list.insert(1, AbilityConfig::new("Cure")),
            Err(ListError::IndexOutOfRange { index: 1, len: 0 })
        );
        assert!(list.update(3, |_| {}).is_err());
        assert!(list.insert(0, AbilityConfig::new("Cure")).is_ok());
    }

    #[test]
    fn clone_drops_listeners() {
        let mut list = BattleList::new("Buffs");
        let (_, events) = recording(&mut list);

        let mut copy = list.clone();
        copy.push(AbilityConfig::new("Haste"));

        assert!(events.lock().unwrap().is_empty());
        assert_eq!(copy.len(), 2);
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn first_usable_skips_rejected_candidates() {
        let list = BattleList::with_actions(
            "Weaponskills",
            vec![
                AbilityConfig::new("Savage Blade")
                    .with_tp_cost(1000)
                    .with_tp_reserve(2000, 3000),
                AbilityConfig::new("Fast Blade").with_tp_cost(1000),
            ],
        );
        let snapshot = ResourceSnapshot::builder("x").mp(0, 0).tp(1500).build();

        let (index, ability) = list.first_usable(Some(&snapshot)).unwrap().unwrap();
        assert_eq!(index, 1);
        assert_eq!(ability.name, "Fast Blade");
        assert_eq!(list.usable(Some(&snapshot)).unwrap().len(), 1);
    }

    #[test]
    fn missing_snapshot_fails_selection_once_resources_are_needed() {
        // The placeholder is disabled, so it is rejected without a snapshot.
        let mut list = BattleList::new("Buffs");
        assert_eq!(list.first_usable(None), Ok(None));

        list.push(AbilityConfig::new("Cure"));
        assert!(matches!(
            list.first_usable(None),
            Err(FilterError::MissingSnapshot { .. })
        ));
    }
}
