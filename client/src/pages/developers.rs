//! Public developer directory and developer detail.

#[cfg(test)]
#[path = "developers_test.rs"]
mod developers_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;
use wire::DeveloperProfile;

use crate::components::developer_card::{DeveloperCard, developer_heading, rate_and_experience};
use crate::util::form::parse_route_id;
use crate::util::markdown::render_markdown_html;
use crate::util::task::{Fetched, spawn_into};

/// Public profiles having `skill` (all of them when the filter is blank).
pub fn filter_developers(profiles: &[DeveloperProfile], skill: &str) -> Vec<DeveloperProfile> {
    profiles
        .iter()
        .filter(|p| p.is_public && p.has_skill(skill))
        .cloned()
        .collect()
}

/// Every distinct skill across `profiles`, case-insensitively, sorted.
pub fn known_skills(profiles: &[DeveloperProfile]) -> Vec<String> {
    let mut skills: Vec<String> = Vec::new();
    for skill in profiles.iter().flat_map(|p| p.skills.iter()) {
        if !skills.iter().any(|s| s.eq_ignore_ascii_case(skill)) {
            skills.push(skill.clone());
        }
    }
    skills.sort_by_key(|s| s.to_ascii_lowercase());
    skills
}

#[component]
pub fn DevelopersPage() -> impl IntoView {
    let profiles = RwSignal::<Fetched<Vec<DeveloperProfile>>>::new(None);
    let skill = RwSignal::new(String::new());

    Effect::new(move || spawn_into(profiles, crate::net::profile::public_developers()));

    view! {
        <section class="developers">
            <h1>"Developers"</h1>
            {move || match profiles.get() {
                None => view! { <p class="loading">"Loading developers..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(list)) => {
                    let skills = known_skills(&list);
                    view! {
                        <label class="developers__filter">
                            "Skill"
                            <select on:change=move |ev| skill.set(event_target_value(&ev))>
                                <option value="">"Any"</option>
                                {skills
                                    .into_iter()
                                    .map(|s| {
                                        let current = s.clone();
                                        let value = s.clone();
                                        view! {
                                            <option value=value selected=move || skill.get() == current>{s}</option>
                                        }
                                    })
                                    .collect_view()}
                            </select>
                        </label>
                        {move || {
                            let shown = filter_developers(&list, &skill.get());
                            if shown.is_empty() {
                                view! { <p>"No developers match that skill."</p> }.into_any()
                            } else {
                                view! {
                                    <div class="developers__grid">
                                        {shown.into_iter().map(|profile| view! { <DeveloperCard profile/> }).collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                        }}
                    }
                        .into_any()
                }
            }}
        </section>
    }
}

#[component]
pub fn DeveloperDetailPage() -> impl IntoView {
    let params = use_params_map();
    let profile = RwSignal::<Fetched<DeveloperProfile>>::new(None);

    Effect::new(move || match params.with(|p| parse_route_id(p.get("id").as_deref())) {
        Some(id) => spawn_into(profile, crate::net::profile::developer(id)),
        None => profile.set(Some(Err("That developer does not exist.".to_owned()))),
    });

    view! {
        <section class="developer">
            <a href="/developers">"← Developers"</a>
            {move || match profile.get() {
                None => view! { <p class="loading">"Loading profile..."</p> }.into_any(),
                Some(Err(e)) => view! { <p class="error">{e}</p> }.into_any(),
                Some(Ok(p)) => {
                    let heading = developer_heading(&p);
                    let summary = rate_and_experience(&p);
                    let bio = p.bio.as_deref().map(render_markdown_html);
                    view! {
                        <h1>{heading}</h1>
                        {summary.map(|s| view! { <p class="developer__rate">{s}</p> })}
                        {bio.map(|html| view! { <div class="developer__bio" inner_html=html></div> })}
                        <ul class="developer__skills">
                            {p.skills.into_iter().map(|s| view! { <li class="skill-chip">{s}</li> }).collect_view()}
                        </ul>
                        {p
                            .portfolio_url
                            .map(|url| {
                                view! {
                                    <a class="developer__portfolio" href=url rel="noopener noreferrer" target="_blank">
                                        "Portfolio"
                                    </a>
                                }
                            })}
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
