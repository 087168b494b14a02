//! Property tests for navigation bounds and enter/leave round trips

use lcdmenu_core::config::DEFAULT_STACK_DEPTH;
use lcdmenu_core::{
    Menu, MenuAction, MenuHost, MenuItem, MenuShow, MenuView, NavError, NavigationSession,
};
use proptest::prelude::*;

#[derive(Default)]
struct Counter {
    item_shows: usize,
}

impl MenuHost for Counter {
    fn show(&mut self, mode: MenuShow, _view: MenuView<'_, Self>) {
        if mode == MenuShow::Item {
            self.item_shows += 1;
        }
    }
}

static ITEMS: [MenuItem<Counter>; 12] = [
    MenuItem::new("0"),
    MenuItem::new("1"),
    MenuItem::new("2"),
    MenuItem::new("3"),
    MenuItem::new("4"),
    MenuItem::new("5"),
    MenuItem::new("6"),
    MenuItem::new("7"),
    MenuItem::new("8"),
    MenuItem::new("9"),
    MenuItem::new("10"),
    MenuItem::new("11"),
];

static SUB: Menu<Counter> = Menu::new("Sub", &ITEMS);

fn menu_with(count: usize) -> &'static Menu<Counter> {
    Box::leak(Box::new(Menu::new("Main", &ITEMS[..count])))
}

fn movement() -> impl Strategy<Value = MenuAction> {
    prop_oneof![
        Just(MenuAction::Previous),
        Just(MenuAction::Next),
        Just(MenuAction::None),
    ]
}

proptest! {
    #[test]
    fn next_stops_at_last_item(count in 1usize..=12, extra in 1usize..5) {
        let mut session: NavigationSession<Counter> = NavigationSession::new(Counter::default());
        session.init(menu_with(count)).unwrap();

        for _ in 0..count - 1 {
            session.process(MenuAction::Next);
        }
        prop_assert_eq!(session.selected_index() as usize, count - 1);

        for _ in 0..extra {
            session.process(MenuAction::Next);
        }
        prop_assert_eq!(session.selected_index() as usize, count - 1);
        prop_assert_eq!(session.current_item().label(), ITEMS[count - 1].label());
    }

    #[test]
    fn index_follows_clamped_model(
        count in 1usize..=12,
        actions in proptest::collection::vec(movement(), 0..64),
    ) {
        let mut session: NavigationSession<Counter> = NavigationSession::new(Counter::default());
        session.init(menu_with(count)).unwrap();

        let mut expected = 0usize;
        for action in actions {
            session.process(action);
            match action {
                MenuAction::Previous => expected = expected.saturating_sub(1),
                MenuAction::Next => expected = (expected + 1).min(count - 1),
                _ => {}
            }
            prop_assert_eq!(session.selected_index() as usize, expected);
            prop_assert_eq!(session.current_item().label(), ITEMS[expected].label());
        }
    }

    #[test]
    fn enter_then_leave_restores_position(
        actions in proptest::collection::vec(movement(), 0..32),
        sub_actions in proptest::collection::vec(movement(), 0..32),
    ) {
        let mut session: NavigationSession<Counter> = NavigationSession::new(Counter::default());
        session.init(menu_with(5)).unwrap();
        for action in actions {
            session.process(action);
        }
        let index = session.selected_index();
        let label = session.current_item().label();

        session.enter_menu(&SUB).unwrap();
        prop_assert_eq!(session.selected_index(), 0);
        for action in sub_actions {
            session.process(action);
        }
        session.leave_menu();

        prop_assert_eq!(session.depth(), 1);
        prop_assert_eq!(session.current_menu().title, "Main");
        prop_assert_eq!(session.selected_index(), index);
        prop_assert_eq!(session.current_item().label(), label);
    }

    #[test]
    fn depth_never_exceeds_capacity(enters in 0usize..20) {
        let mut session: NavigationSession<Counter> = NavigationSession::new(Counter::default());
        session.init(&SUB).unwrap();

        for i in 0..enters {
            let result = session.enter_menu(&SUB);
            if i + 1 < DEFAULT_STACK_DEPTH {
                prop_assert_eq!(result, Ok(()));
            } else {
                prop_assert_eq!(result, Err(NavError::StackFull));
            }
        }
        prop_assert_eq!(session.depth(), (enters + 1).min(DEFAULT_STACK_DEPTH));
    }
}

#[test]
fn full_depth_then_rejected() {
    let mut session: NavigationSession<Counter> = NavigationSession::new(Counter::default());
    session.init(&SUB).unwrap();
    for _ in 1..DEFAULT_STACK_DEPTH {
        session.enter_menu(&SUB).unwrap();
    }
    assert_eq!(session.depth(), DEFAULT_STACK_DEPTH);

    let shows = session.host().item_shows;
    assert_eq!(session.enter_menu(&SUB), Err(NavError::StackFull));
    assert_eq!(session.depth(), DEFAULT_STACK_DEPTH);
    assert_eq!(session.host().item_shows, shows);

    // Unwind back to the root, which is never popped
    for _ in 0..DEFAULT_STACK_DEPTH + 2 {
        session.leave_menu();
    }
    assert_eq!(session.depth(), 1);
}
