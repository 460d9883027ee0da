/*
 * Copyright 2025 Security Union LLC
 *
 * Licensed under either of
 *
 * * Apache License, Version 2.0
 *   (http://www.apache.org/licenses/LICENSE-2.0)
 * * MIT license
 *   (http://opensource.org/licenses/MIT)
 *
 * at your option.
 *
 * Unless you explicitly state otherwise, any contribution intentionally
 * submitted for inclusion in the work by you, as defined in the Apache-2.0
 * license, shall be dual licensed as above, without any additional terms or
 * conditions.
 */

use leptos::*;
use serde::{Deserialize, Serialize};

/// The site's icon set. A closed mapping: service records refer to icons by
/// name, and anything unrecognized renders as `Star`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum IconKind {
    Sun,
    Search,
    Droplets,
    Wrench,
    ShieldCheck,
    Zap,
    Leaf,
    Phone,
    Mail,
    MapPin,
    Clock,
    ChevronDown,
    ChevronUp,
    Star,
}

impl IconKind {
    /// Resolves a symbolic icon name from the content catalog. Absent or
    /// unknown names fall back to `Star`.
    pub fn from_name(name: Option<&str>) -> Self {
        match name {
            Some("Sun") => IconKind::Sun,
            Some("Search") => IconKind::Search,
            Some("Droplets") => IconKind::Droplets,
            Some("Wrench") => IconKind::Wrench,
            Some("ShieldCheck") => IconKind::ShieldCheck,
            Some("Zap") => IconKind::Zap,
            Some("Leaf") => IconKind::Leaf,
            Some("Phone") => IconKind::Phone,
            Some("Mail") => IconKind::Mail,
            Some("MapPin") => IconKind::MapPin,
            Some("Clock") => IconKind::Clock,
            Some("Star") => IconKind::Star,
            _ => IconKind::Star,
        }
    }

    fn svg_body(self) -> &'static str {
        match self {
            IconKind::Sun => {
                r#"<circle cx="12" cy="12" r="4"/><path d="M12 2v2"/><path d="M12 20v2"/><path d="m4.93 4.93 1.41 1.41"/><path d="m17.66 17.66 1.41 1.41"/><path d="M2 12h2"/><path d="M20 12h2"/><path d="m6.34 17.66-1.41 1.41"/><path d="m19.07 4.93-1.41 1.41"/>"#
            }
            IconKind::Search => {
                r#"<circle cx="11" cy="11" r="8"/><path d="m21 21-4.3-4.3"/>"#
            }
            IconKind::Droplets => {
                r#"<path d="M7 16.3c2.2 0 4-1.83 4-4.05 0-1.16-.57-2.26-1.71-3.19S7.29 6.75 7 5.3c-.29 1.45-1.14 2.84-2.29 3.76S3 11.1 3 12.25c0 2.22 1.8 4.05 4 4.05z"/><path d="M12.56 6.6A10.97 10.97 0 0 0 14 3.02c.5 2.5 2 4.9 4 6.5s3 3.5 3 5.5a6.98 6.98 0 0 1-11.91 4.97"/>"#
            }
            IconKind::Wrench => {
                r#"<path d="M14.7 6.3a1 1 0 0 0 0 1.4l1.6 1.6a1 1 0 0 0 1.4 0l3.77-3.77a6 6 0 0 1-7.94 7.94l-6.91 6.91a2.12 2.12 0 0 1-3-3l6.91-6.91a6 6 0 0 1 7.94-7.94l-3.76 3.76z"/>"#
            }
            IconKind::ShieldCheck => {
                r#"<path d="M20 13c0 5-3.5 7.5-7.66 8.95a1 1 0 0 1-.67-.01C7.5 20.5 4 18 4 13V6a1 1 0 0 1 1-1c2 0 4.5-1.2 6.24-2.72a1.17 1.17 0 0 1 1.52 0C14.51 3.81 17 5 19 5a1 1 0 0 1 1 1z"/><path d="m9 12 2 2 4-4"/>"#
            }
            IconKind::Zap => {
                r#"<polygon points="13 2 3 14 12 14 11 22 21 10 12 10 13 2"/>"#
            }
            IconKind::Leaf => {
                r#"<path d="M11 20A7 7 0 0 1 9.8 6.1C15.5 5 17 4.48 19 2c1 2 2 4.18 2 8 0 5.5-4.78 10-10 10Z"/><path d="M2 21c0-3 1.85-5.36 5.08-6C9.5 14.52 12 13 13 12"/>"#
            }
            IconKind::Phone => {
                r#"<path d="M22 16.92v3a2 2 0 0 1-2.18 2 19.79 19.79 0 0 1-8.63-3.07 19.5 19.5 0 0 1-6-6 19.79 19.79 0 0 1-3.07-8.67A2 2 0 0 1 4.11 2h3a2 2 0 0 1 2 1.72 12.84 12.84 0 0 0 .7 2.81 2 2 0 0 1-.45 2.11L8.09 9.91a16 16 0 0 0 6 6l1.27-1.27a2 2 0 0 1 2.11-.45 12.84 12.84 0 0 0 2.81.7A2 2 0 0 1 22 16.92z"/>"#
            }
            IconKind::Mail => {
                r#"<rect width="20" height="16" x="2" y="4" rx="2"/><path d="m22 7-8.97 5.7a1.94 1.94 0 0 1-2.06 0L2 7"/>"#
            }
            IconKind::MapPin => {
                r#"<path d="M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z"/><circle cx="12" cy="10" r="3"/>"#
            }
            IconKind::Clock => {
                r#"<circle cx="12" cy="12" r="10"/><polyline points="12 6 12 12 16 14"/>"#
            }
            IconKind::ChevronDown => r#"<path d="m6 9 6 6 6-6"/>"#,
            IconKind::ChevronUp => r#"<path d="m18 15-6-6-6 6"/>"#,
            IconKind::Star => {
                r#"<polygon points="12 2 15.09 8.26 22 9.27 17 14.14 18.18 21.02 12 17.77 5.82 21.02 7 14.14 2 9.27 8.91 8.26 12 2"/>"#
            }
        }
    }
}

#[component]
pub fn Icon(
    kind: IconKind,
    #[prop(into, default = String::from("w-6 h-6"))] class: String,
) -> impl IntoView {
    view! {
        <svg
            class=class
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=kind.svg_body()
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_names_resolve_to_matching_entries() {
        assert_eq!(IconKind::from_name(Some("Search")), IconKind::Search);
        assert_eq!(IconKind::from_name(Some("Wrench")), IconKind::Wrench);
        assert_eq!(IconKind::from_name(Some("ShieldCheck")), IconKind::ShieldCheck);
    }

    #[test]
    fn unknown_or_absent_names_fall_back_to_star() {
        assert_eq!(IconKind::from_name(Some("Rocket")), IconKind::Star);
        assert_eq!(IconKind::from_name(Some("")), IconKind::Star);
        assert_eq!(IconKind::from_name(None), IconKind::Star);
    }

    #[test]
    fn every_icon_has_svg_markup() {
        let all = [
            IconKind::Sun,
            IconKind::Search,
            IconKind::Droplets,
            IconKind::Wrench,
            IconKind::ShieldCheck,
            IconKind::Zap,
            IconKind::Leaf,
            IconKind::Phone,
            IconKind::Mail,
            IconKind::MapPin,
            IconKind::Clock,
            IconKind::ChevronDown,
            IconKind::ChevronUp,
            IconKind::Star,
        ];
        for kind in all {
            assert!(kind.svg_body().contains("/>"), "{kind:?}");
        }
    }
}
