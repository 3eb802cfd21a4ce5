use crate::scheduler::RevertPolicy;

/// In-page anchors reachable from the navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    About,
    Services,
    Faq,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::About, Section::Services, Section::Faq, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Services => "services",
            Section::Faq => "faq",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::About => "About",
            Section::Services => "Services",
            Section::Faq => "FAQ",
            Section::Contact => "Contact",
        }
    }
}

/// Sections that pulse for a while after a hero call to action.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Highlight {
    About,
    Contact,
}

impl Highlight {
    pub fn section(self) -> Section {
        match self {
            Highlight::About => Section::About,
            Highlight::Contact => Section::Contact,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct UiToggleState {
    pub open_faq: Option<usize>,
    pub mobile_menu_open: bool,
    pub contact_highlighted: bool,
    pub about_highlighted: bool,
    contact_ticket: u64,
    about_ticket: u64,
}

impl UiToggleState {
    /// Expands `index`, or collapses it if it is already the open entry.
    /// Indices past `faq_count` leave the accordion untouched.
    pub fn toggle_faq(mut self, index: usize, faq_count: usize) -> Self {
        if index >= faq_count {
            return self;
        }
        self.open_faq = if self.open_faq == Some(index) { None } else { Some(index) };
        self
    }

    pub fn toggle_mobile_menu(mut self) -> Self {
        self.mobile_menu_open = !self.mobile_menu_open;
        self
    }

    pub fn close_mobile_menu(mut self) -> Self {
        self.mobile_menu_open = false;
        self
    }

    pub fn is_highlighted(&self, highlight: Highlight) -> bool {
        match highlight {
            Highlight::About => self.about_highlighted,
            Highlight::Contact => self.contact_highlighted,
        }
    }

    /// Turns the highlight on and remembers `ticket` as the newest trigger.
    pub fn highlight(mut self, highlight: Highlight, ticket: u64) -> Self {
        match highlight {
            Highlight::About => {
                self.about_highlighted = true;
                self.about_ticket = ticket;
            }
            Highlight::Contact => {
                self.contact_highlighted = true;
                self.contact_ticket = ticket;
            }
        }
        self
    }

    /// Handles a revert timer firing for `ticket`.
    pub fn expire(mut self, highlight: Highlight, ticket: u64, policy: RevertPolicy) -> Self {
        let latest = match highlight {
            Highlight::About => self.about_ticket,
            Highlight::Contact => self.contact_ticket,
        };
        if !policy.accepts(latest, ticket) {
            return self;
        }
        match highlight {
            Highlight::About => self.about_highlighted = false,
            Highlight::Contact => self.contact_highlighted = false,
        }
        self
    }
}
