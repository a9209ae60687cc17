// Unit tests for Mentor Match

use mentor_match::core::scoring::{score_breakdown, score_compatibility};
use mentor_match::models::{Address, EntrepreneurProfile, Location, MentorProfile, ScoringWeights};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn pune_tech_entrepreneur() -> EntrepreneurProfile {
    EntrepreneurProfile {
        user_id: "ENT001".to_string(),
        primary_industry: Some("Technology".to_string()),
        secondary_industries: vec![],
        business_stage: Some("seed".to_string()),
        skills: vec![],
        language: strings(&["English"]),
        address: Some(Address {
            city: Some("Pune".to_string()),
            ..Default::default()
        }),
    }
}

fn pune_tech_mentor() -> MentorProfile {
    let mut mentor = MentorProfile::new("MENTOR001");
    mentor.sector = Some("Technology".to_string());
    mentor.experience = Some("seed stage mentor".to_string());
    mentor.languages = strings(&["English"]);
    mentor.location = Some(Location {
        city: Some("Pune".to_string()),
        ..Default::default()
    });
    mentor.rating = 5.0;
    mentor
}

#[test]
fn test_matching_sector_stage_language_city_and_top_rating() {
    let score = score_compatibility(&pune_tech_entrepreneur(), &pune_tech_mentor(), &ScoringWeights::default());
    assert_eq!(score, 65);
}

#[test]
fn test_unrelated_unrated_mentor_scores_zero() {
    let mut mentor = pune_tech_mentor();
    mentor.sector = Some("Finance".to_string());
    mentor.experience = Some("growth stage lending".to_string());
    mentor.languages = strings(&["Hindi"]);
    mentor.location = Some(Location {
        city: Some("Mumbai".to_string()),
        ..Default::default()
    });
    mentor.rating = 0.0;

    let score = score_compatibility(&pune_tech_entrepreneur(), &mentor, &ScoringWeights::default());
    assert_eq!(score, 0);
}

#[test]
fn test_half_rating_rounds_up() {
    let mut mentor = MentorProfile::new("m");
    mentor.rating = 2.5;

    let score = score_compatibility(&EntrepreneurProfile::default(), &mentor, &ScoringWeights::default());
    assert_eq!(score, 3);
}

#[test]
fn test_secondary_industry_substring_match() {
    let entrepreneur = EntrepreneurProfile {
        secondary_industries: strings(&["FinTech", "HealthTech"]),
        ..Default::default()
    };
    let mut mentor = MentorProfile::new("m");
    mentor.expertise_areas = strings(&["fintech solutions"]);

    let breakdown = score_breakdown(&entrepreneur, &mentor, &ScoringWeights::default());
    assert_eq!(breakdown.secondary_industries, 20.0);
    assert_eq!(breakdown.score(), 20);
}

#[test]
fn test_case_insensitive_sector_and_city() {
    let mut mentor = pune_tech_mentor();
    mentor.sector = Some("TECHNOLOGY".to_string());
    mentor.location = Some(Location {
        city: Some("pune".to_string()),
        ..Default::default()
    });

    let breakdown = score_breakdown(&pune_tech_entrepreneur(), &mentor, &ScoringWeights::default());
    assert_eq!(breakdown.primary_industry, 30.0);
    assert_eq!(breakdown.location, 5.0);
}

#[test]
fn test_score_is_deterministic() {
    let entrepreneur = pune_tech_entrepreneur();
    let mentor = pune_tech_mentor();
    let weights = ScoringWeights::default();

    let first = score_compatibility(&entrepreneur, &mentor, &weights);
    for _ in 0..100 {
        assert_eq!(score_compatibility(&entrepreneur, &mentor, &weights), first);
    }
}

#[test]
fn test_score_within_valid_range() {
    let weights = ScoringWeights::default();
    let mut entrepreneur = pune_tech_entrepreneur();
    entrepreneur.secondary_industries = strings(&["a", "b", "c", "d", "e"]);
    entrepreneur.skills = strings(&["a", "b", "c", "d", "e"]);

    let mut mentor = pune_tech_mentor();
    mentor.expertise_areas = strings(&["abcde"]);
    mentor.specializations = strings(&["abcde"]);

    for rating in [0.0, 1.0, 2.5, 5.0, 9.0, -3.0] {
        mentor.rating = rating;
        let score = score_compatibility(&entrepreneur, &mentor, &weights);
        assert!(score <= 100, "Score {} is out of range [0, 100]", score);
    }

    let score = score_compatibility(&EntrepreneurProfile::default(), &MentorProfile::new("m"), &weights);
    assert_eq!(score, 0);
}

#[test]
fn test_adding_a_matching_factor_never_lowers_score() {
    let weights = ScoringWeights::default();
    let entrepreneur = pune_tech_entrepreneur();

    let mut mentor = pune_tech_mentor();
    mentor.languages = strings(&["Hindi"]);
    let before = score_compatibility(&entrepreneur, &mentor, &weights);

    mentor.languages.push("English".to_string());
    let after = score_compatibility(&entrepreneur, &mentor, &weights);

    assert!(after >= before);
    assert_eq!(after - before, 10);
}

#[test]
fn test_missing_optional_fields_contribute_zero() {
    let entrepreneur = EntrepreneurProfile {
        user_id: "E".to_string(),
        primary_industry: None,
        secondary_industries: strings(&["Retail"]),
        business_stage: None,
        skills: strings(&["sales"]),
        language: vec![],
        address: None,
    };

    let mut mentor = MentorProfile::new("m");
    mentor.location = Some(Location::default());
    mentor.rating = 4.0;

    let breakdown = score_breakdown(&entrepreneur, &mentor, &ScoringWeights::default());

    assert_eq!(breakdown.primary_industry, 0.0);
    assert_eq!(breakdown.secondary_industries, 0.0);
    assert_eq!(breakdown.business_stage, 0.0);
    assert_eq!(breakdown.skills, 0.0);
    assert_eq!(breakdown.language, 0.0);
    assert_eq!(breakdown.location, 0.0);
    assert_eq!(breakdown.score(), 4);
}

#[test]
fn test_custom_weights_are_applied() {
    let weights = ScoringWeights {
        primary_industry: 50.0,
        rating: 0.0,
        ..ScoringWeights::default()
    };

    let breakdown = score_breakdown(&pune_tech_entrepreneur(), &pune_tech_mentor(), &weights);
    assert_eq!(breakdown.primary_industry, 50.0);
    assert_eq!(breakdown.rating, 0.0);
    assert_eq!(breakdown.score(), 80);
}
