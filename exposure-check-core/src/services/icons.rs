//! Icon selection from an OS name or a user agent string.

use crate::types::{BrowserIcon, OsIcon};

/// `(needles, icon)` pairs, evaluated top to bottom. First match wins.
type RuleTable<T> = &'static [(&'static [&'static str], T)];

const OS_RULES: RuleTable<OsIcon> = &[
    (&["windows"], OsIcon::Windows),
    (&["mac", "ios"], OsIcon::Apple),
    (&["android"], OsIcon::Android),
    (&["ubuntu", "debian", "fedora", "arch", "linux"], OsIcon::Linux),
];

const BROWSER_RULES: RuleTable<BrowserIcon> = &[
    (&["firefox"], BrowserIcon::Firefox),
    (&["edge", "edg/"], BrowserIcon::Edge),
    (&["chrome", "chromium"], BrowserIcon::Chrome),
    (&["safari"], BrowserIcon::Safari),
    (&["opera", "opr"], BrowserIcon::Opera),
    (
        &["internet explorer", "trident", "msie"],
        BrowserIcon::InternetExplorer,
    ),
];

fn select<T: Copy>(rules: RuleTable<T>, subject: &str, default: T) -> T {
    let subject = subject.to_lowercase();
    rules
        .iter()
        .find(|(needles, _)| needles.iter().any(|needle| subject.contains(needle)))
        .map_or(default, |(_, icon)| *icon)
}

/// Icon for an operating system name.
pub fn select_os_icon(os: &str) -> OsIcon {
    select(OS_RULES, os, OsIcon::Desktop)
}

/// Icon for a browser user agent.
pub fn select_browser_icon(user_agent: &str) -> BrowserIcon {
    select(BROWSER_RULES, user_agent, BrowserIcon::Globe)
}
