//! Hard-coded seed data for the admin dashboard and marketing pages.
//!
//! Every admin list is seeded from these functions at app start. Edits only
//! touch the in-memory copies, so reloading the page restores exactly what
//! these return.

#[cfg(test)]
#[path = "fixtures_test.rs"]
mod fixtures_test;

use crate::model::{
    Address, BusinessHours, CaseStat, CaseStudy, ContactSettings, Faq, FaqCategory, PricingPlan,
    SeoMeta, Service, ServicePricing, SocialLinks, TeamMember, Testimonial,
};

fn strings(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial {
            id: "t-1".to_owned(),
            name: "Sarah Mitchell".to_owned(),
            role: "Broker-Owner, Mitchell & Co Realty".to_owned(),
            quote: "Hearthside rebuilt our Google Business Profile from scratch. We went from \
                    page three to the top of the map pack in four months, and the phone has not \
                    stopped ringing since."
                .to_owned(),
            image: "/images/testimonials/sarah-mitchell.jpg".to_owned(),
            rating: 5,
            featured: true,
            date: "March 2026".to_owned(),
        },
        Testimonial {
            id: "t-2".to_owned(),
            name: "David Okafor".to_owned(),
            role: "Team Lead, Lakeshore Homes Group".to_owned(),
            quote: "Their lead generation campaigns pay for themselves. We closed eleven \
                    transactions last quarter that started as Hearthside leads."
                .to_owned(),
            image: "/images/testimonials/david-okafor.jpg".to_owned(),
            rating: 5,
            featured: true,
            date: "February 2026".to_owned(),
        },
        Testimonial {
            id: "t-3".to_owned(),
            name: "Elena Vasquez".to_owned(),
            role: "Home Seller, Austin TX".to_owned(),
            quote: "The listing marketing package made our house look like a magazine spread. \
                    We had three offers above asking within a week."
                .to_owned(),
            image: "/images/testimonials/elena-vasquez.jpg".to_owned(),
            rating: 5,
            featured: false,
            date: "January 2026".to_owned(),
        },
        Testimonial {
            id: "t-4".to_owned(),
            name: "James Whitfield".to_owned(),
            role: "Agent, Whitfield Properties".to_owned(),
            quote: "I was skeptical about handing off my social media, but the content calendar \
                    they run has brought me two referral clients already."
                .to_owned(),
            image: "/images/testimonials/james-whitfield.jpg".to_owned(),
            rating: 4,
            featured: false,
            date: "December 2025".to_owned(),
        },
        Testimonial {
            id: "t-5".to_owned(),
            name: "Priya Raman".to_owned(),
            role: "First-Time Buyer, Round Rock TX".to_owned(),
            quote: "Their buyer resources walked us through every step. We always knew what was \
                    coming next and never felt rushed."
                .to_owned(),
            image: "/images/testimonials/priya-raman.jpg".to_owned(),
            rating: 5,
            featured: true,
            date: "November 2025".to_owned(),
        },
    ]
}

#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        Service {
            id: "s-1".to_owned(),
            title: "Google Business Profile Management".to_owned(),
            subtitle: "Own the map pack in your market".to_owned(),
            description: "Complete setup, optimization, and weekly upkeep of your Google \
                          Business Profile: categories, service areas, photos, posts, Q&A, and \
                          review responses that keep your listing ranking and converting."
                .to_owned(),
            features: strings(&[
                "Profile audit and full optimization",
                "Weekly posts and photo updates",
                "Review monitoring and responses",
                "Monthly ranking and call reports",
            ]),
            image: "/images/services/gbp-management.jpg".to_owned(),
            icon: "map-pin".to_owned(),
            link: "gbp-management".to_owned(),
            active: true,
        },
        Service {
            id: "s-2".to_owned(),
            title: "Lead Generation".to_owned(),
            subtitle: "Predictable buyer and seller pipelines".to_owned(),
            description: "Managed ad campaigns across Google and Meta tuned for real-estate \
                          intent, landing pages that convert, and lead routing that gets new \
                          inquiries to your phone in minutes."
                .to_owned(),
            features: strings(&[
                "Google and Meta ad management",
                "Custom landing pages per campaign",
                "Instant lead alerts and routing",
                "Cost-per-lead reporting",
            ]),
            image: "/images/services/lead-generation.jpg".to_owned(),
            icon: "target".to_owned(),
            link: "lead-generation".to_owned(),
            active: true,
        },
        Service {
            id: "s-3".to_owned(),
            title: "Listing Marketing".to_owned(),
            subtitle: "Make every listing look its best".to_owned(),
            description: "Professional photography coordination, single-property websites, \
                          printed collateral, and a launch plan that puts each listing in front \
                          of the right buyers in its first week."
                .to_owned(),
            features: strings(&[
                "Photography and staging coordination",
                "Single-property websites",
                "Open-house and launch campaigns",
                "Print and digital collateral",
            ]),
            image: "/images/services/listing-marketing.jpg".to_owned(),
            icon: "home".to_owned(),
            link: "listing-marketing".to_owned(),
            active: true,
        },
        Service {
            id: "s-4".to_owned(),
            title: "Social Media Management".to_owned(),
            subtitle: "Stay in front of your sphere".to_owned(),
            description: "A done-for-you content calendar across Instagram and Facebook: market \
                          updates, listing features, and neighborhood spotlights posted on a \
                          consistent schedule under your brand."
                .to_owned(),
            features: strings(&[
                "Monthly content calendar",
                "Branded templates and captions",
                "Community management",
                "Engagement reporting",
            ]),
            image: "/images/services/social-media.jpg".to_owned(),
            icon: "share".to_owned(),
            link: "social-media".to_owned(),
            active: true,
        },
        Service {
            id: "s-5".to_owned(),
            title: "Websites & SEO".to_owned(),
            subtitle: "A home base that ranks".to_owned(),
            description: "Agent and team websites built for speed and search, with IDX-ready \
                          structure, neighborhood pages, and an SEO plan that compounds month \
                          over month."
                .to_owned(),
            features: strings(&[
                "Custom design and build",
                "Neighborhood landing pages",
                "On-page and local SEO",
                "Performance monitoring",
            ]),
            image: "/images/services/websites-seo.jpg".to_owned(),
            icon: "globe".to_owned(),
            link: "websites-seo".to_owned(),
            active: true,
        },
        Service {
            id: "s-6".to_owned(),
            title: "Transaction Coordination".to_owned(),
            subtitle: "Contract to close, handled".to_owned(),
            description: "Licensed coordinators manage deadlines, disclosures, and signatures \
                          from executed contract to closing day so agents stay focused on the \
                          next deal."
                .to_owned(),
            features: strings(&[
                "Deadline and contingency tracking",
                "Document collection and e-signature",
                "Weekly status updates to all parties",
                "Compliance-ready file at close",
            ]),
            image: "/images/services/transaction-coordination.jpg".to_owned(),
            icon: "clipboard".to_owned(),
            link: "transaction-coordination".to_owned(),
            active: true,
        },
    ]
}

#[must_use]
pub fn service_pricing() -> Vec<ServicePricing> {
    vec![
        ServicePricing {
            id: "p-1".to_owned(),
            service: "Google Business Profile Management".to_owned(),
            icon: "map-pin".to_owned(),
            plans: vec![
                PricingPlan {
                    name: "Essentials".to_owned(),
                    price: "$299".to_owned(),
                    period: "per month".to_owned(),
                    features: strings(&[
                        "Profile optimization",
                        "2 posts per week",
                        "Review responses",
                        "Monthly report",
                    ]),
                    popular: false,
                    icon: "leaf".to_owned(),
                },
                PricingPlan {
                    name: "Growth".to_owned(),
                    price: "$499".to_owned(),
                    period: "per month".to_owned(),
                    features: strings(&[
                        "Everything in Essentials",
                        "Daily posts",
                        "Photo and video updates",
                        "Competitor tracking",
                        "Quarterly strategy call",
                    ]),
                    popular: true,
                    icon: "trending-up".to_owned(),
                },
                PricingPlan {
                    name: "Market Leader".to_owned(),
                    price: "$899".to_owned(),
                    period: "per month".to_owned(),
                    features: strings(&[
                        "Everything in Growth",
                        "Multi-location profiles",
                        "Review generation campaigns",
                        "Dedicated account manager",
                    ]),
                    popular: false,
                    icon: "award".to_owned(),
                },
            ],
        },
        ServicePricing {
            id: "p-2".to_owned(),
            service: "Lead Generation".to_owned(),
            icon: "target".to_owned(),
            plans: vec![
                PricingPlan {
                    name: "Launch".to_owned(),
                    price: "$750".to_owned(),
                    period: "per month + ad spend".to_owned(),
                    features: strings(&[
                        "One campaign channel",
                        "Landing page included",
                        "Lead alerts",
                        "Monthly reporting",
                    ]),
                    popular: false,
                    icon: "rocket".to_owned(),
                },
                PricingPlan {
                    name: "Pipeline".to_owned(),
                    price: "$1,250".to_owned(),
                    period: "per month + ad spend".to_owned(),
                    features: strings(&[
                        "Google and Meta campaigns",
                        "A/B tested landing pages",
                        "CRM integration",
                        "Bi-weekly optimization",
                    ]),
                    popular: true,
                    icon: "funnel".to_owned(),
                },
                PricingPlan {
                    name: "Team Scale".to_owned(),
                    price: "Custom".to_owned(),
                    period: "tailored engagement".to_owned(),
                    features: strings(&[
                        "Multi-agent routing",
                        "ISA handoff workflows",
                        "Custom reporting dashboards",
                    ]),
                    popular: false,
                    icon: "users".to_owned(),
                },
            ],
        },
        ServicePricing {
            id: "p-3".to_owned(),
            service: "Social Media Management".to_owned(),
            icon: "share".to_owned(),
            plans: vec![
                PricingPlan {
                    name: "Presence".to_owned(),
                    price: "$350".to_owned(),
                    period: "per month".to_owned(),
                    features: strings(&[
                        "3 posts per week",
                        "One platform",
                        "Branded templates",
                    ]),
                    popular: false,
                    icon: "feather".to_owned(),
                },
                PricingPlan {
                    name: "Authority".to_owned(),
                    price: "$650".to_owned(),
                    period: "per month".to_owned(),
                    features: strings(&[
                        "Daily posts",
                        "Instagram and Facebook",
                        "Stories and reels",
                        "Community management",
                    ]),
                    popular: true,
                    icon: "star".to_owned(),
                },
            ],
        },
    ]
}

#[must_use]
pub fn faqs() -> Vec<Faq> {
    vec![
        Faq {
            id: "f-1".to_owned(),
            question: "How quickly will I see results?".to_owned(),
            answer: "Most clients see measurable movement within 60 to 90 days. Google Business \
                     Profile rankings typically improve first, while SEO and content programs \
                     compound over two to three quarters."
                .to_owned(),
            category: FaqCategory::General,
            order: 1,
            active: true,
        },
        Faq {
            id: "f-2".to_owned(),
            question: "Do you require long-term contracts?".to_owned(),
            answer: "No. Every engagement is month to month after an initial 90-day ramp. We \
                     keep clients by performing, not by locking them in."
                .to_owned(),
            category: FaqCategory::Pricing,
            order: 1,
            active: true,
        },
        Faq {
            id: "f-3".to_owned(),
            question: "Do you work with individual agents or only teams?".to_owned(),
            answer: "Both. Roughly half our clients are solo agents building their first \
                     pipeline; the rest are teams and brokerages scaling an established one."
                .to_owned(),
            category: FaqCategory::Services,
            order: 1,
            active: true,
        },
        Faq {
            id: "f-4".to_owned(),
            question: "Who owns the ad accounts and creative?".to_owned(),
            answer: "You do. Campaigns run in accounts you own, and every asset we produce is \
                     yours to keep if we ever part ways."
                .to_owned(),
            category: FaqCategory::Services,
            order: 2,
            active: true,
        },
        Faq {
            id: "f-5".to_owned(),
            question: "What does onboarding look like?".to_owned(),
            answer: "A kickoff call, access collection, and a 30-day launch plan. You will have \
                     a named account manager and a shared checklist from day one."
                .to_owned(),
            category: FaqCategory::Process,
            order: 1,
            active: true,
        },
        Faq {
            id: "f-6".to_owned(),
            question: "Is ad spend included in your pricing?".to_owned(),
            answer: "Management fees and ad spend are separate. We recommend a minimum media \
                     budget per campaign and you pay the platforms directly."
                .to_owned(),
            category: FaqCategory::Pricing,
            order: 2,
            active: true,
        },
        Faq {
            id: "f-7".to_owned(),
            question: "Can you take over an existing Google Business Profile?".to_owned(),
            answer: "Yes. We start with an audit, fix category and citation issues, and take \
                     over posting and review responses without losing your history."
                .to_owned(),
            category: FaqCategory::Services,
            order: 3,
            active: true,
        },
        Faq {
            id: "f-8".to_owned(),
            question: "How do I get started?".to_owned(),
            answer: "Fill out the onboarding application or book a call from the contact page. \
                     We respond within one business day."
                .to_owned(),
            category: FaqCategory::General,
            order: 2,
            active: true,
        },
    ]
}

#[must_use]
pub fn team_members() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: "m-1".to_owned(),
            name: "Rachel Hearth".to_owned(),
            role: "Founder & CEO".to_owned(),
            image: "/images/team/rachel-hearth.jpg".to_owned(),
            bio: "Former top-producing agent who built Hearthside after a decade of watching \
                  great agents lose business to mediocre marketing."
                .to_owned(),
            socials: SocialLinks {
                linkedin: Some("https://linkedin.com/in/rachelhearth".to_owned()),
                twitter: Some("https://twitter.com/rachelhearth".to_owned()),
                facebook: None,
                instagram: None,
            },
            active: true,
        },
        TeamMember {
            id: "m-2".to_owned(),
            name: "Marcus Delgado".to_owned(),
            role: "Head of Paid Media".to_owned(),
            image: "/images/team/marcus-delgado.jpg".to_owned(),
            bio: "Runs the ad desk. Ten years of performance marketing across real estate and \
                  home services, obsessive about cost per appointment."
                .to_owned(),
            socials: SocialLinks {
                linkedin: Some("https://linkedin.com/in/marcusdelgado".to_owned()),
                twitter: None,
                facebook: None,
                instagram: None,
            },
            active: true,
        },
        TeamMember {
            id: "m-3".to_owned(),
            name: "Amy Chen".to_owned(),
            role: "Director of Local SEO".to_owned(),
            image: "/images/team/amy-chen.jpg".to_owned(),
            bio: "Leads the Google Business Profile practice. Has optimized more than four \
                  hundred profiles across Texas markets."
                .to_owned(),
            socials: SocialLinks {
                linkedin: Some("https://linkedin.com/in/amychenseo".to_owned()),
                twitter: None,
                facebook: None,
                instagram: Some("https://instagram.com/amychenseo".to_owned()),
            },
            active: true,
        },
        TeamMember {
            id: "m-4".to_owned(),
            name: "Tom Beckett".to_owned(),
            role: "Lead Transaction Coordinator".to_owned(),
            image: "/images/team/tom-beckett.jpg".to_owned(),
            bio: "Licensed coordinator who has shepherded over nine hundred files from contract \
                  to close without a missed deadline."
                .to_owned(),
            socials: SocialLinks::default(),
            active: true,
        },
    ]
}

#[must_use]
pub fn case_studies() -> Vec<CaseStudy> {
    vec![
        CaseStudy {
            id: "c-1".to_owned(),
            title: "From Invisible to #1 in the Map Pack".to_owned(),
            client: "Mitchell & Co Realty".to_owned(),
            location: "Austin, TX".to_owned(),
            category: "Google Business Profile".to_owned(),
            image: "/images/case-studies/mitchell-co.jpg".to_owned(),
            description: "A boutique brokerage with a dormant profile and no review strategy \
                          needed to compete against national franchises on local search."
                .to_owned(),
            stats: vec![
                CaseStat { value: "312%".to_owned(), label: "more profile calls".to_owned() },
                CaseStat { value: "#1".to_owned(), label: "map pack position".to_owned() },
                CaseStat { value: "4.9".to_owned(), label: "review average".to_owned() },
            ],
            challenges: strings(&[
                "Profile suspended twice for category violations",
                "Eleven reviews, none answered",
                "No posts or photos in over a year",
            ]),
            solutions: strings(&[
                "Full reinstatement and category cleanup",
                "Weekly posting and photo cadence",
                "Review generation campaign with response templates",
            ]),
            results: strings(&[
                "Top map-pack position for five priority keywords",
                "Profile calls up 312% in four months",
                "Ninety-one new reviews at a 4.9 average",
            ]),
            featured: true,
        },
        CaseStudy {
            id: "c-2".to_owned(),
            title: "Eleven Closings from a Standing Start".to_owned(),
            client: "Lakeshore Homes Group".to_owned(),
            location: "Georgetown, TX".to_owned(),
            category: "Lead Generation".to_owned(),
            image: "/images/case-studies/lakeshore.jpg".to_owned(),
            description: "A three-agent team wanted a predictable buyer pipeline without buying \
                          shared portal leads."
                .to_owned(),
            stats: vec![
                CaseStat { value: "11".to_owned(), label: "closings in Q4".to_owned() },
                CaseStat { value: "$38".to_owned(), label: "cost per lead".to_owned() },
                CaseStat { value: "6.2x".to_owned(), label: "return on ad spend".to_owned() },
            ],
            challenges: strings(&[
                "Portal leads shared with four competitors",
                "No landing pages or follow-up automation",
                "Inconsistent monthly spend",
            ]),
            solutions: strings(&[
                "Dedicated buyer campaigns per neighborhood",
                "Custom landing pages with instant alerts",
                "Fixed media budget with bi-weekly optimization",
            ]),
            results: strings(&[
                "Eleven closed transactions in the first full quarter",
                "Average cost per lead of $38 against a $95 market norm",
                "6.2x blended return on ad spend",
            ]),
            featured: true,
        },
        CaseStudy {
            id: "c-3".to_owned(),
            title: "A Listing Launch That Set the Street Record".to_owned(),
            client: "Whitfield Properties".to_owned(),
            location: "Cedar Park, TX".to_owned(),
            category: "Listing Marketing".to_owned(),
            image: "/images/case-studies/whitfield.jpg".to_owned(),
            description: "A solo agent needed a premium launch for a hillside listing priced \
                          above recent neighborhood comps."
                .to_owned(),
            stats: vec![
                CaseStat { value: "3".to_owned(), label: "offers above asking".to_owned() },
                CaseStat { value: "6".to_owned(), label: "days on market".to_owned() },
                CaseStat { value: "104%".to_owned(), label: "of list price".to_owned() },
            ],
            challenges: strings(&[
                "Priced 8% above the highest recent comp",
                "Dated interior photography from a prior listing",
                "No pre-launch buzz in the neighborhood",
            ]),
            solutions: strings(&[
                "Twilight photo and video shoot with staging refresh",
                "Single-property site with early-access signup",
                "Coming-soon campaign to the brokerage sphere",
            ]),
            results: strings(&[
                "Three above-ask offers within the first weekend",
                "Under contract in six days",
                "Closed at 104% of list, a street record",
            ]),
            featured: false,
        },
    ]
}

#[must_use]
pub fn contact_settings() -> ContactSettings {
    ContactSettings {
        phone: "(512) 555-0148".to_owned(),
        email: "hello@hearthsiderealty.com".to_owned(),
        address: Address {
            street: "1804 Lavaca Street".to_owned(),
            suite: "Suite 210".to_owned(),
            city: "Austin".to_owned(),
            state: "TX".to_owned(),
            zip: "78701".to_owned(),
        },
        hours: vec![
            BusinessHours {
                days: "Monday – Friday".to_owned(),
                hours: "9:00 AM – 6:00 PM".to_owned(),
            },
            BusinessHours {
                days: "Saturday".to_owned(),
                hours: "10:00 AM – 2:00 PM".to_owned(),
            },
            BusinessHours {
                days: "Sunday".to_owned(),
                hours: "Closed".to_owned(),
            },
        ],
        socials: SocialLinks {
            linkedin: Some("https://linkedin.com/company/hearthside-realty-group".to_owned()),
            twitter: None,
            facebook: Some("https://facebook.com/hearthsiderealtygroup".to_owned()),
            instagram: Some("https://instagram.com/hearthsiderealty".to_owned()),
        },
        seo: SeoMeta {
            title: "Hearthside Realty Group — Real Estate Marketing That Closes".to_owned(),
            description: "Google Business Profile management, lead generation, and listing \
                          marketing for agents and teams across Central Texas."
                .to_owned(),
            keywords: "real estate marketing, google business profile, lead generation, \
                       listing marketing, austin"
                .to_owned(),
        },
    }
}
