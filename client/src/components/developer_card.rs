//! Public developer directory card.

#[cfg(test)]
#[path = "developer_card_test.rs"]
mod developer_card_test;

use leptos::prelude::*;
use wire::DeveloperProfile;

/// Headline for a profile without a configured name.
pub fn developer_heading(profile: &DeveloperProfile) -> String {
    profile
        .full_name
        .as_deref()
        .map(str::trim)
        .filter(|n| !n.is_empty())
        .map_or_else(|| format!("Developer #{}", profile.user_id), str::to_owned)
}

/// `"$85/hr · 6 yrs"`, omitting unknown parts.
pub fn rate_and_experience(profile: &DeveloperProfile) -> Option<String> {
    let mut parts = Vec::new();
    if let Some(rate) = profile.hourly_rate {
        parts.push(format!("${rate:.0}/hr"));
    }
    match profile.experience_years {
        Some(1) => parts.push("1 yr".to_owned()),
        Some(years) => parts.push(format!("{years} yrs")),
        None => {}
    }
    (!parts.is_empty()).then(|| parts.join(" · "))
}

#[component]
pub fn DeveloperCard(profile: DeveloperProfile) -> impl IntoView {
    let href = format!("/developers/{}", profile.user_id);
    let heading = developer_heading(&profile);
    let summary = rate_and_experience(&profile);

    view! {
        <a class="developer-card" href=href>
            <span class="developer-card__name">{heading}</span>
            {summary.map(|s| view! { <span class="developer-card__rate">{s}</span> })}
            <ul class="developer-card__skills">
                {profile.skills.into_iter().map(|skill| view! { <li class="skill-chip">{skill}</li> }).collect_view()}
            </ul>
        </a>
    }
}
