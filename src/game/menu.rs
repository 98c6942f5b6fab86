use crate::core::prelude::*;

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuPage {
    Main,
    Ranking,
    Credits,
}

/// Signal back to the game loop that the menu wants a state change.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum MenuAction {
    StartRace,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq)]
enum MainButton {
    Start,
    Ranking,
    Credits,
}

/// The title menu and its two sub-pages. Button boxes live in the menu
/// camera's orthographic space; taps arrive already unprojected.
#[derive(Debug)]
pub struct MenuScreen {
    page: MenuPage,
    main_buttons: [(Aabb, MainButton); 3],
    back_button: Aabb,
}

impl MenuScreen {
    pub fn new() -> Self {
        Self {
            page: MenuPage::Main,
            main_buttons: [
                (
                    Aabb::from_top_left(Vec2 { x: 80., y: -50. }, Vec2 { x: 220., y: 30. }),
                    MainButton::Start,
                ),
                (
                    Aabb::from_top_left(Vec2 { x: 105., y: -120. }, Vec2 { x: 140., y: 30. }),
                    MainButton::Ranking,
                ),
                (
                    Aabb::from_top_left(Vec2 { x: 105., y: -190. }, Vec2 { x: 140., y: 30. }),
                    MainButton::Credits,
                ),
            ],
            back_button: Aabb::from_top_left(Vec2 { x: 250., y: -200. }, Vec2 { x: 140., y: 20. }),
        }
    }

    pub fn page(&self) -> MenuPage {
        self.page
    }

    /// Handles a tap-down in menu state: first intersecting button wins.
    pub fn handle_tap(&mut self, tap: Vec2) -> Option<MenuAction> {
        let tap = Point::new(tap);
        match self.page {
            MenuPage::Main => {
                let hit = self
                    .main_buttons
                    .iter()
                    .find(|(bounds, _)| tap.intersects_aabb(bounds))
                    .map(|(_, button)| *button);
                match hit {
                    Some(MainButton::Start) => {
                        info!("starting race");
                        return Some(MenuAction::StartRace);
                    }
                    Some(MainButton::Ranking) => self.page = MenuPage::Ranking,
                    Some(MainButton::Credits) => self.page = MenuPage::Credits,
                    None => {}
                }
            }
            MenuPage::Ranking | MenuPage::Credits => {
                if tap.intersects_aabb(&self.back_button) {
                    self.page = MenuPage::Main;
                }
            }
        }
        None
    }
}

impl Default for MenuScreen {
    fn default() -> Self {
        Self::new()
    }
}
