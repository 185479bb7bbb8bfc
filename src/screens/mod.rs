pub mod confirm_quit;
pub mod explore;
pub mod home;
pub mod notice;
pub mod profile;
pub mod reflect;

pub use confirm_quit::ConfirmQuitScreen;
pub use explore::ExploreScreen;
pub use home::HomeScreen;
pub use profile::ProfileScreen;
pub use reflect::ReflectScreen;

use crate::app::ScreenWidget;
use crate::state::Screen;

/// One long-lived widget per screen, so local cursor/scroll state survives navigation.
#[derive(Default)]
pub struct Screens {
    home: HomeScreen,
    explore: ExploreScreen,
    reflect: ReflectScreen,
    profile: ProfileScreen,
}

impl Screens {
    pub fn get(&self, screen: Screen) -> &dyn ScreenWidget {
        match screen {
            Screen::Home => &self.home,
            Screen::Explore => &self.explore,
            Screen::Reflect => &self.reflect,
            Screen::Profile => &self.profile,
        }
    }

    pub fn get_mut(&mut self, screen: Screen) -> &mut dyn ScreenWidget {
        match screen {
            Screen::Home => &mut self.home,
            Screen::Explore => &mut self.explore,
            Screen::Reflect => &mut self.reflect,
            Screen::Profile => &mut self.profile,
        }
    }
}
