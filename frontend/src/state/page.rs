use std::cell::RefCell;
use std::rc::Rc;

use log::{debug, info};
use yew::Reducible;

use crate::config;
use crate::content::FAQS;
use crate::scheduler::RevertPolicy;
use crate::state::form::{validate, ContactFormState, FieldInput, ValidationErrors};
use crate::state::ui::{Highlight, Section, UiToggleState};

/// Everything the user can do to the page, plus timer callbacks.
#[derive(Clone, Debug, PartialEq)]
pub enum PageAction {
    Mounted,
    ToggleFaq(usize),
    ToggleMobileMenu,
    /// Plain navigation link: scroll and close the drawer.
    ScrollTo(Section),
    /// Hero call to action: scroll, close the drawer, highlight the target.
    Spotlight { highlight: Highlight, ticket: u64 },
    HighlightExpired { highlight: Highlight, ticket: u64 },
    Edit(FieldInput),
    Submit,
}

/// Work the browser layer performs after a transition.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    ScrollTo(Section),
    ScheduleRevert {
        highlight: Highlight,
        ticket: u64,
        delay_ms: u32,
    },
    AnnounceSubmission(ContactFormState),
}

/// Effects waiting for the browser layer. Every state reduced from the same
/// root shares one queue, so effects from dispatches that land before the next
/// render are kept until drained.
#[derive(Clone, Debug, Default)]
pub struct Outbox(Rc<RefCell<Vec<Effect>>>);

impl Outbox {
    fn extend(&self, effects: Vec<Effect>) {
        self.0.borrow_mut().extend(effects);
    }

    pub fn drain(&self) -> Vec<Effect> {
        std::mem::take(&mut *self.0.borrow_mut())
    }

    pub fn is_empty(&self) -> bool {
        self.0.borrow().is_empty()
    }
}

impl PartialEq for Outbox {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Transition {
    pub state: PageState,
    pub effects: Vec<Effect>,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageState {
    pub ui: UiToggleState,
    pub form: ContactFormState,
    pub errors: ValidationErrors,
    pub loaded: bool,
    pub submissions: u32,
    pub policy: RevertPolicy,
    /// Effects not yet run; `revision` bumps on every reduction.
    pub outbox: Outbox,
    pub revision: u64,
}

impl Default for PageState {
    fn default() -> Self {
        Self::with_policy(config::REVERT_POLICY)
    }
}

impl PageState {
    pub fn with_policy(policy: RevertPolicy) -> Self {
        Self {
            ui: UiToggleState::default(),
            form: ContactFormState::default(),
            errors: ValidationErrors::default(),
            loaded: false,
            submissions: 0,
            policy,
            outbox: Outbox::default(),
            revision: 0,
        }
    }

    pub fn apply(&self, action: PageAction) -> Transition {
        let mut next = self.clone();
        let mut effects = Vec::new();

        match action {
            PageAction::Mounted => next.loaded = true,
            PageAction::ToggleFaq(index) => {
                next.ui = next.ui.toggle_faq(index, FAQS.len());
            }
            PageAction::ToggleMobileMenu => {
                next.ui = next.ui.toggle_mobile_menu();
            }
            PageAction::ScrollTo(section) => {
                next.ui = next.ui.close_mobile_menu();
                effects.push(Effect::ScrollTo(section));
            }
            PageAction::Spotlight { highlight, ticket } => {
                next.ui = next.ui.close_mobile_menu().highlight(highlight, ticket);
                effects.push(Effect::ScrollTo(highlight.section()));
                effects.push(Effect::ScheduleRevert {
                    highlight,
                    ticket,
                    delay_ms: config::HIGHLIGHT_DURATION_MS,
                });
            }
            PageAction::HighlightExpired { highlight, ticket } => {
                next.ui = next.ui.expire(highlight, ticket, self.policy);
            }
            PageAction::Edit(input) => {
                let field = input.field();
                next.form.apply(input);
                if next.errors.clear(field) {
                    debug!("Cleared error on {}", field.id());
                }
            }
            PageAction::Submit => {
                next.errors = validate(&next.form);
                if next.errors.is_empty() {
                    next.submissions += 1;
                    info!("Contact form accepted ({} so far)", next.submissions);
                    effects.push(Effect::AnnounceSubmission(next.form.clone()));
                } else {
                    debug!(
                        "Contact form rejected with {} errors: {:?}",
                        next.errors.len(),
                        next.errors.fields().map(|f| f.id()).collect::<Vec<_>>()
                    );
                }
            }
        }

        Transition { state: next, effects }
    }
}

impl Reducible for PageState {
    type Action = PageAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let Transition { mut state, effects } = self.apply(action);
        state.revision = self.revision + 1;
        state.outbox.extend(effects);
        Rc::new(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::form::FormField;

    fn run(state: PageState, actions: Vec<PageAction>) -> PageState {
        actions.into_iter().fold(state, |state, action| state.apply(action).state)
    }

    fn filled() -> Vec<PageAction> {
        vec![
            PageAction::Edit(FieldInput::Text(FormField::Name, "Ada".into())),
            PageAction::Edit(FieldInput::Text(FormField::Phone, "555-0100".into())),
            PageAction::Edit(FieldInput::Text(FormField::Email, "a@b.co".into())),
            PageAction::Edit(FieldInput::Text(FormField::Message, "Anxiety".into())),
            PageAction::Edit(FieldInput::Text(FormField::PreferredTime, "Evenings".into())),
            PageAction::Edit(FieldInput::Checked(true)),
        ]
    }

    #[test]
    fn valid_submit_announces_once_and_keeps_the_form() {
        let state = run(PageState::default(), filled());
        let transition = state.apply(PageAction::Submit);

        assert!(transition.state.errors.is_empty());
        assert_eq!(transition.state.submissions, 1);
        assert_eq!(transition.effects, vec![Effect::AnnounceSubmission(state.form.clone())]);
        assert_eq!(transition.state.form, state.form);
    }

    #[test]
    fn invalid_submit_is_blocked() {
        let mut actions = filled();
        actions.push(PageAction::Edit(FieldInput::Text(FormField::Phone, " ".into())));
        let state = run(PageState::default(), actions);
        let transition = state.apply(PageAction::Submit);

        assert!(transition.effects.is_empty());
        assert_eq!(transition.state.submissions, 0);
        assert_eq!(transition.state.errors.fields().collect::<Vec<_>>(), vec![FormField::Phone]);
    }

    #[test]
    fn unchecked_agreement_blocks_with_single_error() {
        let mut actions = filled();
        actions.push(PageAction::Edit(FieldInput::Checked(false)));
        actions.push(PageAction::Submit);
        let state = run(PageState::default(), actions);

        assert_eq!(state.submissions, 0);
        assert_eq!(state.errors.fields().collect::<Vec<_>>(), vec![FormField::AgreeToContact]);
    }

    #[test]
    fn editing_clears_only_that_fields_error() {
        let state = run(
            PageState::default(),
            vec![
                PageAction::Submit,
                PageAction::Edit(FieldInput::Text(FormField::Email, "x".into())),
            ],
        );

        assert!(!state.errors.contains(FormField::Email));
        assert_eq!(state.errors.len(), FormField::ALL.len() - 1);
        assert_eq!(state.errors.get(FormField::Name), Some("Name is required"));
    }

    #[test]
    fn errors_are_recomputed_on_every_submit() {
        let state = run(
            PageState::default(),
            vec![PageAction::Submit, PageAction::Edit(FieldInput::Text(FormField::Email, "bad".into()))],
        );
        assert!(!state.errors.contains(FormField::Email));

        let state = state.apply(PageAction::Submit).state;
        assert_eq!(state.errors.get(FormField::Email), Some("Please enter a valid email"));
    }

    #[test]
    fn each_valid_submit_counts() {
        let mut actions = filled();
        actions.push(PageAction::Submit);
        actions.push(PageAction::Submit);
        assert_eq!(run(PageState::default(), actions).submissions, 2);
    }

    #[test]
    fn plain_navigation_closes_menu_without_highlight() {
        let state = run(PageState::default(), vec![PageAction::ToggleMobileMenu]);
        assert!(state.ui.mobile_menu_open);

        let transition = state.apply(PageAction::ScrollTo(Section::Contact));
        assert!(!transition.state.ui.mobile_menu_open);
        assert!(!transition.state.ui.contact_highlighted);
        assert_eq!(transition.effects, vec![Effect::ScrollTo(Section::Contact)]);
    }

    #[test]
    fn spotlight_highlights_and_schedules_revert() {
        let state = run(PageState::default(), vec![PageAction::ToggleMobileMenu]);
        let transition = state.apply(PageAction::Spotlight { highlight: Highlight::About, ticket: 7 });

        assert!(transition.state.ui.about_highlighted);
        assert!(!transition.state.ui.mobile_menu_open);
        assert_eq!(
            transition.effects,
            vec![
                Effect::ScrollTo(Section::About),
                Effect::ScheduleRevert {
                    highlight: Highlight::About,
                    ticket: 7,
                    delay_ms: 3_000,
                },
            ]
        );
    }

    // Two triggers inside the window: the first timer still fires and turns the
    // flag off while the second trigger's own timer is pending.
    #[test]
    fn retrigger_reverts_on_first_timer_under_independent_policy() {
        let state = run(
            PageState::with_policy(RevertPolicy::Independent),
            vec![
                PageAction::Spotlight { highlight: Highlight::Contact, ticket: 1 },
                PageAction::Spotlight { highlight: Highlight::Contact, ticket: 2 },
            ],
        );
        assert!(state.ui.contact_highlighted);

        let state = state.apply(PageAction::HighlightExpired { highlight: Highlight::Contact, ticket: 1 }).state;
        assert!(!state.ui.contact_highlighted);

        let state = state.apply(PageAction::HighlightExpired { highlight: Highlight::Contact, ticket: 2 }).state;
        assert!(!state.ui.contact_highlighted);
    }

    #[test]
    fn retrigger_waits_for_latest_timer_under_reschedule_policy() {
        let state = run(
            PageState::with_policy(RevertPolicy::CancelAndReschedule),
            vec![
                PageAction::Spotlight { highlight: Highlight::Contact, ticket: 1 },
                PageAction::Spotlight { highlight: Highlight::Contact, ticket: 2 },
                PageAction::HighlightExpired { highlight: Highlight::Contact, ticket: 1 },
            ],
        );
        assert!(state.ui.contact_highlighted);

        let state = state.apply(PageAction::HighlightExpired { highlight: Highlight::Contact, ticket: 2 }).state;
        assert!(!state.ui.contact_highlighted);
    }

    #[test]
    fn faq_transitions_through_page() {
        let state = run(PageState::default(), vec![PageAction::ToggleFaq(2), PageAction::ToggleFaq(4)]);
        assert_eq!(state.ui.open_faq, Some(4));

        let state = run(state, vec![PageAction::ToggleFaq(4)]);
        assert_eq!(state.ui.open_faq, None);
    }

    #[test]
    fn reducer_records_effects_in_outbox() {
        let state = Rc::new(PageState::default());
        let state = state.reduce(PageAction::ScrollTo(Section::Faq));
        assert_eq!(state.revision, 1);
        assert_eq!(state.outbox.drain(), vec![Effect::ScrollTo(Section::Faq)]);

        let state = state.reduce(PageAction::Mounted);
        assert!(state.loaded);
        assert_eq!(state.revision, 2);
        assert!(state.outbox.is_empty());
    }

    #[test]
    fn undrained_effects_survive_later_reductions() {
        let state = Rc::new(PageState::default());
        let state = state.reduce(PageAction::Spotlight { highlight: Highlight::Contact, ticket: 1 });
        let state = state.reduce(PageAction::ScrollTo(Section::Faq));
        let state = state.reduce(PageAction::Mounted);
        assert_eq!(state.revision, 3);

        assert_eq!(
            state.outbox.drain(),
            vec![
                Effect::ScrollTo(Section::Contact),
                Effect::ScheduleRevert {
                    highlight: Highlight::Contact,
                    ticket: 1,
                    delay_ms: 3_000,
                },
                Effect::ScrollTo(Section::Faq),
            ]
        );
        assert!(state.outbox.drain().is_empty());
    }
}
