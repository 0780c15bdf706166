//! Card for one team member on the about page.

use content::model::TeamMember;
use leptos::prelude::*;

#[component]
pub fn TeamCard(member: TeamMember) -> impl IntoView {
    let socials = [
        ("LinkedIn", member.socials.linkedin.clone()),
        ("Twitter", member.socials.twitter.clone()),
        ("Facebook", member.socials.facebook.clone()),
        ("Instagram", member.socials.instagram.clone()),
    ]
    .into_iter()
    .filter_map(|(label, url)| url.map(|url| (label, url)))
    .collect::<Vec<_>>();

    view! {
        <article class="team-card">
            <img class="team-card__photo" src=member.image alt=member.name.clone()/>
            <h3 class="team-card__name">{member.name}</h3>
            <p class="team-card__role">{member.role}</p>
            <p class="team-card__bio">{member.bio}</p>
            <ul class="team-card__socials">
                {socials
                    .into_iter()
                    .map(|(label, url)| {
                        view! {
                            <li>
                                <a href=url target="_blank" rel="noreferrer">{label}</a>
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
        </article>
    }
}
