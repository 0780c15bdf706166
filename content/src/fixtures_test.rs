use super::*;

#[test]
fn fixture_ids_are_unique_within_each_family() {
    fn assert_unique(ids: Vec<&str>) {
        let mut sorted = ids.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(sorted.len(), ids.len());
    }

    assert_unique(testimonials().iter().map(|t| t.id.as_str()).collect());
    assert_unique(services().iter().map(|s| s.id.as_str()).collect());
    assert_unique(service_pricing().iter().map(|p| p.id.as_str()).collect());
    assert_unique(faqs().iter().map(|f| f.id.as_str()).collect());
    assert_unique(team_members().iter().map(|m| m.id.as_str()).collect());
    assert_unique(case_studies().iter().map(|c| c.id.as_str()).collect());
}

#[test]
fn testimonial_ratings_stay_in_star_range() {
    for t in testimonials() {
        assert!((1..=5).contains(&t.rating), "rating out of range for {}", t.id);
    }
}

#[test]
fn every_service_has_a_detail_slug_and_features() {
    for service in services() {
        assert!(!service.link.is_empty());
        assert!(!service.features.is_empty());
    }
}

#[test]
fn service_slugs_are_unique() {
    let mut slugs: Vec<String> = services().into_iter().map(|s| s.link).collect();
    let before = slugs.len();
    slugs.sort();
    slugs.dedup();
    assert_eq!(slugs.len(), before);
}

#[test]
fn each_pricing_group_marks_at_most_one_popular_plan() {
    for group in service_pricing() {
        let popular = group.plans.iter().filter(|p| p.popular).count();
        assert!(popular <= 1, "group {} has {popular} popular plans", group.id);
    }
}

#[test]
fn case_studies_carry_three_stat_pairs() {
    for study in case_studies() {
        assert_eq!(study.stats.len(), 3, "case study {} stats", study.id);
        assert!(!study.challenges.is_empty());
        assert!(!study.solutions.is_empty());
        assert!(!study.results.is_empty());
    }
}

#[test]
fn home_page_has_featured_content_to_render() {
    assert!(testimonials().iter().any(|t| t.featured));
    assert!(case_studies().iter().any(|c| c.featured));
}

#[test]
fn contact_settings_is_fully_populated() {
    let settings = contact_settings();
    assert!(!settings.phone.is_empty());
    assert!(!settings.email.is_empty());
    assert!(!settings.hours.is_empty());
    assert!(!settings.seo.title.is_empty());
}
