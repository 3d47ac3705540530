use super::*;
use proptest::prelude::*;

fn panel(index: u8) -> PanelId {
    PanelId::from(format!("panel-{index}"))
}

#[test]
fn single_mode_replaces_open_panel() {
    let mut group = DisclosureGroup::single();
    group.toggle("shipping");
    group.toggle("returns");

    assert!(group.is_open(&"returns".into()));
    assert!(!group.is_open(&"shipping".into()));
    assert_eq!(group.open_set().len(), 1);
}

#[test]
fn single_mode_collapses_when_open_panel_toggled() {
    let mut group = DisclosureGroup::single().with_initially_open(["faq-1"]);
    let open = group.toggle("faq-1");
    assert!(open.is_empty());
}

#[test]
fn multiple_mode_flips_each_panel_independently() {
    let mut group = DisclosureGroup::multiple();
    group.toggle("company");
    group.toggle("legal");
    assert_eq!(group.open_set().len(), 2);

    let open = group.toggle("company");
    assert_eq!(
        open.iter().cloned().collect::<Vec<_>>(),
        vec![PanelId::from("legal")]
    );
}

#[test]
fn unknown_ids_are_simply_opened() {
    let mut group = DisclosureGroup::default();
    assert_eq!(group.mode(), DisclosureMode::Single);
    assert!(!group.is_open(&"never-rendered".into()));
    group.toggle("never-rendered");
    assert!(group.is_open(&"never-rendered".into()));
}

#[test]
fn single_mode_seed_is_clamped_to_first_id() {
    let group = DisclosureGroup::single().with_initially_open(["b", "a", "c"]);
    assert_eq!(group.open_set().first(), Some(&PanelId::from("b")));
    assert_eq!(group.open_set().len(), 1);

    let multi = DisclosureGroup::multiple().with_initially_open(["b", "a", "b"]);
    assert_eq!(
        multi.open_set().iter().map(ToString::to_string).collect::<Vec<_>>(),
        vec!["a".to_string(), "b".to_string()]
    );
}

#[test]
fn group_without_seed_starts_collapsed() {
    let group = DisclosureGroup::multiple().with_initially_open(Vec::<PanelId>::new());
    assert!(group.open_set().is_empty());
    assert!(format!("{group:?}").contains("Multiple"));
}

#[test]
fn plain_toggle_keeps_handler_but_does_not_call_it() {
    use std::cell::Cell;
    use std::rc::Rc;

    let calls = Rc::new(Cell::new(0usize));
    let mut group = DisclosureGroup::multiple().on_change({
        let calls = calls.clone();
        move |_open: &OpenSet, _window: &mut gpui::Window, _cx: &mut gpui::App| calls.set(calls.get() + 1)
    });
    group.toggle("shipping");
    let copy = group.clone();

    assert!(group.is_open(&"shipping".into()));
    assert_eq!(calls.get(), 0);
    assert!(format!("{copy:?}").contains("on_change: true"));
    assert!(format!("{:?}", DisclosureGroup::single()).contains("on_change: false"));
}

proptest! {
    #[test]
    fn single_mode_never_opens_more_than_one(ops in prop::collection::vec(0u8..6, 0..40)) {
        let mut group = DisclosureGroup::single();
        for op in ops {
            let open = group.toggle(panel(op));
            prop_assert!(open.len() <= 1);
        }
    }

    #[test]
    fn single_mode_double_toggle_restores_set(
        seed in prop::collection::vec(0u8..6, 0..10),
        target in 0u8..6,
    ) {
        let mut group = DisclosureGroup::single();
        for op in seed {
            group.toggle(panel(op));
        }
        let before = group.open_set().clone();
        group.toggle(panel(target));
        group.toggle(panel(target));
        // A different open panel was replaced by the first toggle.
        if before.is_empty() || before.contains(&panel(target)) {
            prop_assert_eq!(group.open_set(), &before);
        } else {
            prop_assert!(group.open_set().is_empty());
        }
    }

    #[test]
    fn multiple_mode_order_does_not_matter(a in 0u8..20, b in 0u8..20) {
        prop_assume!(a != b);
        let mut forward = DisclosureGroup::multiple();
        forward.toggle(panel(a));
        forward.toggle(panel(b));

        let mut backward = DisclosureGroup::multiple();
        backward.toggle(panel(b));
        backward.toggle(panel(a));

        let expected: OpenSet = [panel(a), panel(b)].into_iter().collect();
        prop_assert_eq!(forward.open_set(), &expected);
        prop_assert_eq!(backward.open_set(), &expected);
    }

    #[test]
    fn is_open_agrees_with_open_set(ops in prop::collection::vec(0u8..8, 0..30), multiple in any::<bool>()) {
        let mode = if multiple { DisclosureMode::Multiple } else { DisclosureMode::Single };
        let mut group = DisclosureGroup::new(mode);
        for op in ops {
            group.toggle(panel(op));
        }
        for index in 0u8..8 {
            let id = panel(index);
            prop_assert_eq!(group.is_open(&id), group.open_set().iter().any(|open| open == &id));
        }
    }
}
