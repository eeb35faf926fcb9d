use dioxus::prelude::*;

use crate::core::config::TeamMember;
use crate::t;

#[component]
pub fn TeamMembersRow(members: Vec<TeamMember>) -> Element {
    rsx! {
        h2 { class: "dashboard-section-title", {t!("section-team")} }
        div { class: "dashboard-members",
            for member in members.iter() {
                div { class: "dashboard-card dashboard-member",
                    p { class: "dashboard-member__name", strong { "{member.name}" } }
                    p { class: "dashboard-member__role", "{member.role}" }
                    p { class: "dashboard-member__skills", "{member.skills}" }
                }
            }
        }
    }
}
