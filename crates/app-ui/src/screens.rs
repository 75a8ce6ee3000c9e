//! Screen renderers for CareConnect
//!
//! Five pure functions, one per destination. Each takes the resolved
//! theme tokens and returns a complete [`Element`] tree; none of them
//! touches navigation state or any external source. Content is the
//! built-in demo data set.
//!
//! Buttons that do nothing yet (calendar month arrows, the message send
//! icon, the admin section buttons) are rendered with no press handler
//! or with an id the shell knows to ignore, so taps never crash.

use crate::components::{
    Button, CalendarCell, Card, ChatBubble, ContainerProps, Element, Input, ProfileItem, Text,
    TextAlign, TimelineEntry,
};
use crate::theme::ThemeTokens;
use crate::tokens::{sizing, spacing};
use crate::typography::TypeRole;

// =============================================================================
// Handler Ids
// =============================================================================

/// Inert handler ids the shell recognizes and drops.
pub mod handlers {
    /// Message send icon
    pub const MESSAGES_SEND: &str = "messages.send";
    /// Calendar previous-month arrow
    pub const SCHEDULE_MONTH_BACK: &str = "schedule.month-back";
    /// Calendar next-month arrow
    pub const SCHEDULE_MONTH_FORWARD: &str = "schedule.month-forward";
    /// Admin personal info section
    pub const ADMIN_PERSONAL_INFO: &str = "admin.personal-info";
    /// Admin caregivers section
    pub const ADMIN_CAREGIVERS: &str = "admin.caregivers";
    /// Admin accessibility section
    pub const ADMIN_ACCESSIBILITY: &str = "admin.accessibility";
    /// Admin settings section
    pub const ADMIN_SETTINGS: &str = "admin.settings";

    /// All inert ids, for dispatch-table checks
    pub const ALL_INERT: [&str; 7] = [
        MESSAGES_SEND,
        SCHEDULE_MONTH_BACK,
        SCHEDULE_MONTH_FORWARD,
        ADMIN_PERSONAL_INFO,
        ADMIN_CAREGIVERS,
        ADMIN_ACCESSIBILITY,
        ADMIN_SETTINGS,
    ];
}

// =============================================================================
// Demo Content
// =============================================================================

/// Home screen cards: (title, supporting line)
pub const HOME_CARDS: [(&str, &str); 4] = [
    ("Medication Reminder", "Aspirin 8:00 AM"),
    ("Health Overview", "No new alerts"),
    ("Upcoming Appointment", "Doctor \u{2022} Apr 26 10:00 AM"),
    ("Step Count", "1,200 steps today"),
];

/// Displayed calendar month
pub const SCHEDULE_MONTH: &str = "April 2024";

/// Weekday header row
pub const WEEKDAY_LABELS: [&str; 7] = ["S", "M", "T", "W", "T", "F", "S"];

/// Visible slice of the month grid
pub const SCHEDULE_DAYS: std::ops::RangeInclusive<u8> = 17..=23;

/// The highlighted day
pub const SCHEDULE_TODAY: u8 = 23;

/// Agenda rows under the calendar: (time, label)
pub const SCHEDULE_AGENDA: [(&str, &str); 2] = [
    ("9:00 AM", "Doctor's appointment"),
    ("10:00 AM", "Aspirin"),
];

/// Conversation transcript: (text, from local user)
pub const MESSAGE_TRANSCRIPT: [(&str, bool); 2] = [
    ("Hi, how's grandma today?", false),
    ("She took her medication on time.", true),
];

/// Message input placeholder
pub const MESSAGE_PLACEHOLDER: &str = "Type a message...";

/// Journal entries, newest first: (date, note)
pub const JOURNAL_ENTRIES: [(&str, &str); 3] = [
    (
        "Apr 25, 2024",
        "Assisted with mobility exercises today. Noticed improvement in gait.",
    ),
    ("Apr 24, 2024", "Changed dosage; monitoring side effects."),
    ("Apr 21, 2024", "Daughter visited; resident engaged well."),
];

/// Profile name on the admin screen
pub const ADMIN_PROFILE_NAME: &str = "Ellen Roberts";

/// Admin section buttons: (label, handler id)
pub const ADMIN_SECTIONS: [(&str, &str); 4] = [
    ("Personal Info", handlers::ADMIN_PERSONAL_INFO),
    ("Caregivers", handlers::ADMIN_CAREGIVERS),
    ("Accessibility", handlers::ADMIN_ACCESSIBILITY),
    ("Settings", handlers::ADMIN_SETTINGS),
];

// =============================================================================
// Shared Chrome
// =============================================================================

/// Top app bar shared by every screen
fn app_bar(title: &str, theme: &ThemeTokens) -> Element {
    Element::row(
        ContainerProps::row()
            .with_padding(spacing::SPACE_MD)
            .with_background(theme.scheme.primary_container.clone()),
        vec![Element::Text(
            Text::new(title, theme.scheme.on_primary_container.clone())
                .with_role(TypeRole::HeadlineMedium),
        )],
    )
}

/// Full-height screen scaffold: app bar over a padded content column
fn scaffold(title: &str, theme: &ThemeTokens, content: Vec<Element>) -> Element {
    Element::column(
        ContainerProps::column().with_background(theme.scheme.background.clone()),
        vec![
            app_bar(title, theme),
            Element::column(
                ContainerProps::column()
                    .with_gap(spacing::SPACE_MD)
                    .with_padding(spacing::SPACE_MD),
                content,
            ),
        ],
    )
}

// =============================================================================
// Home
// =============================================================================

/// Render the Home dashboard
pub fn render_home(theme: &ThemeTokens) -> Element {
    let cards = HOME_CARDS
        .iter()
        .map(|(title, subtitle)| {
            Element::Card(Card {
                title: (*title).to_string(),
                subtitle: (*subtitle).to_string(),
                container_color: theme.scheme.secondary_container.clone(),
                content_color: theme.scheme.on_secondary_container.clone(),
                corner_radius: theme.shapes.medium,
            })
        })
        .collect();

    scaffold("CareConnect", theme, cards)
}

// =============================================================================
// Schedule
// =============================================================================

/// Render the Schedule calendar
pub fn render_schedule(theme: &ThemeTokens) -> Element {
    // Month header with inert paging arrows.
    let month_row = Element::row(
        ContainerProps::row().with_gap(spacing::SPACE_MD),
        vec![
            Element::Button(
                Button::new(
                    "<",
                    theme.scheme.background.clone(),
                    theme.scheme.on_background.clone(),
                )
                .with_handler(handlers::SCHEDULE_MONTH_BACK),
            ),
            Element::Text(
                Text::new(SCHEDULE_MONTH, theme.scheme.on_background.clone())
                    .with_role(TypeRole::TitleLarge)
                    .with_align(TextAlign::Center),
            ),
            Element::Button(
                Button::new(
                    ">",
                    theme.scheme.background.clone(),
                    theme.scheme.on_background.clone(),
                )
                .with_handler(handlers::SCHEDULE_MONTH_FORWARD),
            ),
        ],
    );

    let weekday_row = Element::row(
        ContainerProps::row().with_gap(spacing::SPACE_SM),
        WEEKDAY_LABELS
            .iter()
            .map(|label| {
                Element::Text(
                    Text::new(*label, theme.scheme.on_background.clone())
                        .with_role(TypeRole::LabelMedium)
                        .with_align(TextAlign::Center),
                )
            })
            .collect(),
    );

    let day_row = Element::row(
        ContainerProps::row().with_gap(spacing::SPACE_SM),
        SCHEDULE_DAYS
            .map(|day| {
                let is_today = day == SCHEDULE_TODAY;
                Element::CalendarCell(CalendarCell {
                    day,
                    is_today,
                    container_color: if is_today {
                        theme.scheme.primary.clone()
                    } else {
                        theme.scheme.background.clone()
                    },
                    content_color: if is_today {
                        theme.scheme.on_primary.clone()
                    } else {
                        theme.scheme.on_background.clone()
                    },
                })
            })
            .collect(),
    );

    let agenda: Vec<Element> = SCHEDULE_AGENDA
        .iter()
        .map(|(time, label)| {
            Element::row(
                ContainerProps::row().with_gap(spacing::SPACE_MD),
                vec![
                    Element::Text(
                        Text::new(*time, theme.scheme.on_background.clone())
                            .with_role(TypeRole::TitleMedium),
                    ),
                    Element::Text(
                        Text::new(*label, theme.scheme.on_background.clone())
                            .with_role(TypeRole::BodyLarge),
                    ),
                ],
            )
        })
        .collect();

    let mut content = vec![month_row, weekday_row, day_row];
    content.extend(agenda);

    scaffold("Schedule", theme, content)
}

// =============================================================================
// Messages
// =============================================================================

/// Render the Messaging conversation
pub fn render_messages(theme: &ThemeTokens) -> Element {
    let bubbles: Vec<Element> = MESSAGE_TRANSCRIPT
        .iter()
        .map(|(text, from_self)| {
            let (container, content) = if *from_self {
                (
                    theme.scheme.primary_container.clone(),
                    theme.scheme.on_primary_container.clone(),
                )
            } else {
                (
                    theme.scheme.secondary_container.clone(),
                    theme.scheme.on_secondary_container.clone(),
                )
            };
            Element::ChatBubble(ChatBubble {
                text: (*text).to_string(),
                from_self: *from_self,
                container_color: container,
                content_color: content,
            })
        })
        .collect();

    let compose_row = Element::row(
        ContainerProps::row().with_gap(spacing::SPACE_SM),
        vec![
            Element::Input(Input::new(MESSAGE_PLACEHOLDER)),
            Element::Button(
                Button::new(
                    "Send",
                    theme.scheme.primary.clone(),
                    theme.scheme.on_primary.clone(),
                )
                .with_icon("send")
                .with_handler(handlers::MESSAGES_SEND),
            ),
        ],
    );

    let mut content = bubbles;
    content.push(compose_row);

    scaffold("Messaging", theme, content)
}

// =============================================================================
// Journal
// =============================================================================

/// Render the Journal timeline
pub fn render_journal(theme: &ThemeTokens) -> Element {
    let entries = JOURNAL_ENTRIES
        .iter()
        .map(|(date, note)| {
            Element::TimelineEntry(TimelineEntry {
                date: (*date).to_string(),
                note: (*note).to_string(),
                container_color: theme.scheme.secondary_container.clone(),
                content_color: theme.scheme.on_secondary_container.clone(),
            })
        })
        .collect();

    scaffold("Journal", theme, entries)
}

// =============================================================================
// Admin
// =============================================================================

/// Render the Admin profile screen
pub fn render_admin(theme: &ThemeTokens) -> Element {
    let profile = Element::ProfileItem(ProfileItem {
        name: ADMIN_PROFILE_NAME.to_string(),
        icon: "account-circle".to_string(),
        icon_size: sizing::icon::PROFILE,
    });

    let mut content = vec![profile];
    content.extend(ADMIN_SECTIONS.iter().map(|(label, handler)| {
        Element::Button(
            Button::new(
                *label,
                theme.scheme.secondary_container.clone(),
                theme.scheme.on_secondary_container.clone(),
            )
            .with_handler(*handler),
        )
    }));

    scaffold("Admin", theme, content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::resolve_theme;

    fn light_theme() -> ThemeTokens {
        resolve_theme(false, false, None)
    }

    #[test]
    fn test_home_card_titles() {
        let tree = render_home(&light_theme());
        let titles: Vec<_> = tree.cards().iter().map(|c| c.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Medication Reminder",
                "Health Overview",
                "Upcoming Appointment",
                "Step Count",
            ]
        );
    }

    #[test]
    fn test_home_card_subtitles() {
        let tree = render_home(&light_theme());
        let cards = tree.cards();
        assert_eq!(cards[0].subtitle, "Aspirin 8:00 AM");
        assert_eq!(cards[3].subtitle, "1,200 steps today");
    }

    #[test]
    fn test_home_app_bar_title() {
        let tree = render_home(&light_theme());
        assert!(tree.contains_text("CareConnect"));
    }

    #[test]
    fn test_schedule_calendar_grid() {
        let tree = render_schedule(&light_theme());
        let cells = tree.calendar_cells();
        assert_eq!(cells.len(), 7);
        assert_eq!(cells[0].day, 17);
        assert_eq!(cells[6].day, 23);

        let today: Vec<_> = cells.iter().filter(|c| c.is_today).collect();
        assert_eq!(today.len(), 1);
        assert_eq!(today[0].day, 23);
        assert_eq!(today[0].container_color, "#6BAA75");
    }

    #[test]
    fn test_schedule_month_and_agenda() {
        let tree = render_schedule(&light_theme());
        assert!(tree.contains_text("April 2024"));
        assert!(tree.contains_text("Doctor's appointment"));
        assert!(tree.contains_text("9:00 AM"));
        assert!(tree.contains_text("Aspirin"));
    }

    #[test]
    fn test_schedule_arrows_are_inert_ids() {
        let tree = render_schedule(&light_theme());
        let handlers: Vec<_> = tree.handlers().iter().map(|h| h.as_str()).collect();
        assert!(handlers.contains(&handlers::SCHEDULE_MONTH_BACK));
        assert!(handlers.contains(&handlers::SCHEDULE_MONTH_FORWARD));
    }

    #[test]
    fn test_messages_transcript() {
        let tree = render_messages(&light_theme());
        let bubbles = tree.bubbles();
        assert_eq!(bubbles.len(), 2);
        assert_eq!(bubbles[0].text, "Hi, how's grandma today?");
        assert!(!bubbles[0].from_self);
        assert_eq!(bubbles[1].text, "She took her medication on time.");
        assert!(bubbles[1].from_self);
    }

    #[test]
    fn test_messages_compose_row() {
        let tree = render_messages(&light_theme());
        let inputs = tree.inputs();
        assert_eq!(inputs.len(), 1);
        assert_eq!(inputs[0].placeholder, "Type a message...");
        assert!(inputs[0].on_submit.is_none());

        let handlers: Vec<_> = tree.handlers().iter().map(|h| h.as_str()).collect();
        assert_eq!(handlers, vec![handlers::MESSAGES_SEND]);
    }

    #[test]
    fn test_journal_entries_newest_first() {
        let tree = render_journal(&light_theme());
        let entries = tree.timeline_entries();
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].date, "Apr 25, 2024");
        assert_eq!(entries[2].date, "Apr 21, 2024");
        assert!(entries[0].note.contains("mobility exercises"));
    }

    #[test]
    fn test_admin_profile_and_sections() {
        let tree = render_admin(&light_theme());
        let profiles = tree.profile_items();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].name, "Ellen Roberts");
        assert_eq!(profiles[0].icon_size, sizing::icon::PROFILE);

        let labels: Vec<_> = tree.buttons().iter().map(|b| b.label.as_str()).collect();
        assert_eq!(
            labels,
            vec!["Personal Info", "Caregivers", "Accessibility", "Settings"]
        );
    }

    #[test]
    fn test_admin_buttons_use_secondary_container() {
        let theme = light_theme();
        let tree = render_admin(&theme);
        for button in tree.buttons() {
            assert_eq!(button.container_color, theme.scheme.secondary_container);
        }
    }

    #[test]
    fn test_renderers_are_deterministic() {
        let theme = light_theme();
        assert_eq!(render_home(&theme), render_home(&theme));
        assert_eq!(render_schedule(&theme), render_schedule(&theme));
    }

    #[test]
    fn test_dark_theme_home_colors() {
        let theme = resolve_theme(true, false, None);
        let tree = render_home(&theme);
        let cards = tree.cards();
        assert_eq!(cards[0].container_color, "#364A49");
    }
}
