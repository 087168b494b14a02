//! Input mapping
//!
//! Turns button presses or rotary encoder detents into menu actions.
//! Debouncing and polling the hardware stay with the board code, which
//! implements `InputSource`.

use lcdmenu_core::{MenuAction, MenuHost, NavigationSession};

/// Unified navigation input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum NavigationEvent {
    /// Up button or encoder counter-clockwise
    Previous,
    /// Down button or encoder clockwise
    Next,
    /// Select button or encoder click
    Select,
    /// Back button or encoder long press
    Back,
}

impl NavigationEvent {
    /// Map an encoder rotation delta (-1, 0, +1) to an event
    pub fn from_rotation(delta: i8) -> Option<Self> {
        match delta {
            d if d > 0 => Some(NavigationEvent::Next),
            d if d < 0 => Some(NavigationEvent::Previous),
            _ => None,
        }
    }

    /// Menu action for this event
    ///
    /// `Back` has no action of its own, see [`apply`](Self::apply).
    pub fn to_action(self) -> MenuAction {
        match self {
            NavigationEvent::Previous => MenuAction::Previous,
            NavigationEvent::Next => MenuAction::Next,
            NavigationEvent::Select => MenuAction::Select,
            NavigationEvent::Back => MenuAction::None,
        }
    }

    /// Check if this event leaves the current menu
    pub fn is_back(&self) -> bool {
        matches!(self, NavigationEvent::Back)
    }

    /// Feed this event to a session
    ///
    /// `Back` leaves the current menu directly; everything else goes
    /// through [`NavigationSession::process`].
    pub fn apply<H: MenuHost, const DEPTH: usize>(self, session: &mut NavigationSession<H, DEPTH>) {
        #[cfg(feature = "defmt")]
        defmt::trace!("input: {}", self);

        if self.is_back() {
            session.leave_menu();
        } else {
            session.process(self.to_action());
        }
    }
}

/// Source of navigation events (buttons, encoder, touch, ...)
pub trait InputSource {
    /// Get the next pending event, if any
    fn poll(&mut self) -> Option<NavigationEvent>;

    /// Apply all pending events to a session
    ///
    /// Returns the number of events processed.
    fn drain_into<H: MenuHost, const DEPTH: usize>(
        &mut self,
        session: &mut NavigationSession<H, DEPTH>,
    ) -> usize {
        let mut count = 0;
        while let Some(event) = self.poll() {
            event.apply(session);
            count += 1;
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MenuScreen;
    use heapless::Deque;
    use lcdmenu_core::{actions, Menu, MenuItem, Parameter};

    struct Queue(Deque<NavigationEvent, 8>);

    impl InputSource for Queue {
        fn poll(&mut self) -> Option<NavigationEvent> {
            self.0.pop_front()
        }
    }

    static ROOT_ITEMS: [MenuItem<MenuScreen>; 2] = [
        MenuItem::with_action("Open", actions::enter_menu, Parameter::Menu(&SUB)),
        MenuItem::new("Other"),
    ];
    static ROOT: Menu<MenuScreen> = Menu::new("Root", &ROOT_ITEMS);

    static SUB_ITEMS: [MenuItem<MenuScreen>; 2] = [MenuItem::new("X"), MenuItem::new("Y")];
    static SUB: Menu<MenuScreen> = Menu::new("Sub", &SUB_ITEMS);

    #[test]
    fn test_rotation_mapping() {
        assert_eq!(NavigationEvent::from_rotation(1), Some(NavigationEvent::Next));
        assert_eq!(
            NavigationEvent::from_rotation(-1),
            Some(NavigationEvent::Previous)
        );
        assert_eq!(NavigationEvent::from_rotation(0), None);
    }

    #[test]
    fn test_action_mapping() {
        assert_eq!(NavigationEvent::Previous.to_action(), MenuAction::Previous);
        assert_eq!(NavigationEvent::Next.to_action(), MenuAction::Next);
        assert_eq!(NavigationEvent::Select.to_action(), MenuAction::Select);
        assert_eq!(NavigationEvent::Back.to_action(), MenuAction::None);
        assert!(NavigationEvent::Back.is_back());
        assert!(!NavigationEvent::Select.is_back());
    }

    #[test]
    fn test_drain_into_session() {
        let mut session: NavigationSession<MenuScreen> = NavigationSession::new(MenuScreen::new());
        session.init(&ROOT).unwrap();

        let mut queue = Queue(Deque::new());
        for event in [
            NavigationEvent::Select,
            NavigationEvent::Next,
            NavigationEvent::Next,
        ] {
            let _ = queue.0.push_back(event);
        }

        assert_eq!(queue.drain_into(&mut session), 3);
        assert_eq!(session.current_menu().title, "Sub");
        assert_eq!(session.current_item().label(), "Y");

        let _ = queue.0.push_back(NavigationEvent::Back);
        assert_eq!(queue.drain_into(&mut session), 1);
        assert_eq!(session.current_menu().title, "Root");
        assert_eq!(session.current_item().label(), "Open");
        assert_eq!(queue.drain_into(&mut session), 0);
    }
}
