//! Card for one client testimonial.

#[cfg(test)]
#[path = "testimonial_card_test.rs"]
mod testimonial_card_test;

use content::model::Testimonial;
use leptos::prelude::*;

/// Star string for a 1–5 rating (filled then hollow).
#[must_use]
pub fn star_row(rating: u8) -> String {
    let filled = usize::from(rating.clamp(1, 5));
    format!("{}{}", "★".repeat(filled), "☆".repeat(5 - filled))
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    view! {
        <figure class="testimonial-card">
            <span class="testimonial-card__stars" aria-label=format!("{} out of 5 stars", testimonial.rating)>
                {star_row(testimonial.rating)}
            </span>
            <blockquote class="testimonial-card__quote">{testimonial.quote}</blockquote>
            <figcaption class="testimonial-card__byline">
                <img class="testimonial-card__avatar" src=testimonial.image alt=testimonial.name.clone()/>
                <span>
                    <strong>{testimonial.name}</strong>
                    <br/>
                    {testimonial.role}
                    " · "
                    {testimonial.date}
                </span>
            </figcaption>
        </figure>
    }
}
