#[derive(PartialEq, Eq, Hash, Clone, Copy, Debug)]
pub enum Tab {
    Catalog,
    Editor,
    Settings,
    Log,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Catalog => "Applications",
            Tab::Editor => "Add application",
            Tab::Settings => "Settings",
            Tab::Log => "Log",
        }
    }
}

pub struct TabManager {
    current_tab: Tab,
}

impl TabManager {
    pub fn new() -> Self {
        Self {
            current_tab: Tab::Catalog,
        }
    }

    pub fn switch_to(&mut self, tab: Tab) {
        if self.current_tab != tab {
            tracing::debug!("Switching view {:?} -> {:?}", self.current_tab, tab);
        }
        self.current_tab = tab;
    }

    pub fn current(&self) -> Tab {
        self.current_tab
    }

    pub fn is_current(&self, tab: Tab) -> bool {
        self.current_tab == tab
    }
}

impl Default for TabManager {
    fn default() -> Self {
        Self::new()
    }
}
