//! Content records managed through the admin dashboard.
//!
//! DESIGN
//! ======
//! Plain in-memory records with no backing store and no referential identity
//! across families. Ids are strings so fixture-assigned ids and
//! timestamp-generated ids share one representation.

#[cfg(test)]
#[path = "model_test.rs"]
mod model_test;

use serde::{Deserialize, Serialize};

use crate::editor::Record;

/// A client testimonial shown on marketing pages and edited in the admin list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    /// Context line shown under the name (e.g. "Home Seller, Austin TX").
    pub role: String,
    pub quote: String,
    pub image: String,
    /// Star rating, clamped to 1..=5 at the edit seam.
    pub rating: u8,
    /// Featured testimonials surface in the home-page carousel.
    pub featured: bool,
    /// Display date string (e.g. "March 2026").
    pub date: String,
}

impl Testimonial {
    /// Clamp a submitted rating into the 1..=5 star range.
    #[must_use]
    pub fn clamp_rating(rating: u8) -> u8 {
        rating.clamp(1, 5)
    }
}

impl Record for Testimonial {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.role, &self.quote]
    }
}

/// A service line offered by the company.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub features: Vec<String>,
    pub image: String,
    /// Icon name resolved by the component layer (e.g. "map-pin").
    pub icon: String,
    /// Detail-page slug under `/services/`.
    pub link: String,
    /// Inactive services stay editable but are hidden from public pages.
    pub active: bool,
}

impl Record for Service {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.subtitle, &self.description]
    }
}

/// A pricing tier within a [`ServicePricing`] group.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PricingPlan {
    pub name: String,
    /// Display price string (e.g. "$299/mo" or "Custom").
    pub price: String,
    pub period: String,
    pub features: Vec<String>,
    /// Highlighted as the recommended tier.
    pub popular: bool,
    pub icon: String,
}

/// Pricing plans grouped under the service they belong to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ServicePricing {
    pub id: String,
    /// Display name of the parent service.
    pub service: String,
    pub icon: String,
    pub plans: Vec<PricingPlan>,
}

impl Record for ServicePricing {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        let mut fields = vec![self.service.as_str()];
        fields.extend(self.plans.iter().map(|plan| plan.name.as_str()));
        fields
    }
}

/// Grouping bucket for FAQ entries.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaqCategory {
    #[default]
    General,
    Services,
    Pricing,
    Process,
}

impl FaqCategory {
    pub const ALL: [Self; 4] = [Self::General, Self::Services, Self::Pricing, Self::Process];

    /// Human-readable label for filter chips and the admin form select.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Services => "Services",
            Self::Pricing => "Pricing",
            Self::Process => "Process",
        }
    }
}

/// A frequently-asked question entry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    pub category: FaqCategory,
    /// Display position within the category.
    pub order: u32,
    pub active: bool,
}

impl Record for Faq {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.question, &self.answer]
    }
}

/// Social profile links, any subset of which may be present.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLinks {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
    pub instagram: Option<String>,
}

/// A team member shown on the about page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    pub image: String,
    pub bio: String,
    pub socials: SocialLinks,
    pub active: bool,
}

impl Record for TeamMember {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.name, &self.role, &self.bio]
    }
}

/// A headline metric pair on a case study card.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseStat {
    pub value: String,
    pub label: String,
}

/// A client success story with challenge/solution/results breakdowns.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub title: String,
    pub client: String,
    pub location: String,
    pub category: String,
    pub image: String,
    pub description: String,
    /// Three headline stat pairs rendered on the card.
    pub stats: Vec<CaseStat>,
    pub challenges: Vec<String>,
    pub solutions: Vec<String>,
    pub results: Vec<String>,
    pub featured: bool,
}

impl Record for CaseStudy {
    fn id(&self) -> &str {
        &self.id
    }

    fn search_text(&self) -> Vec<&str> {
        vec![&self.title, &self.client, &self.category]
    }
}

/// Street address rendered in the footer and contact page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub suite: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// One row of the business-hours table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub days: String,
    pub hours: String,
}

/// Page metadata defaults applied by the head manager.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SeoMeta {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

/// Sitewide contact configuration — a single record, no list semantics.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ContactSettings {
    pub phone: String,
    pub email: String,
    pub address: Address,
    pub hours: Vec<BusinessHours>,
    pub socials: SocialLinks,
    pub seo: SeoMeta,
}
