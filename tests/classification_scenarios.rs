use insurance_classifier::classifier::{
    BusinessTags, ClassificationEngine, ClassificationStats, ClassifierConfig, CompanyRecord,
    parse_tags,
};
use insurance_classifier::error::{ClassifierError, Result};
use insurance_classifier::vector::cosine_similarity;

fn taxonomy(labels: &[&str]) -> Vec<String> {
    labels.iter().map(|s| s.to_string()).collect()
}

fn sample_engine() -> Result<ClassificationEngine> {
    ClassificationEngine::new(taxonomy(&[
        "Flood Insurance",
        "Auto Insurance",
        "Insurance Brokerage",
        "Risk Consulting",
        "Claims Administration",
        "Bakery Supplies",
    ]))
}

fn sample_records() -> Vec<CompanyRecord> {
    vec![
        CompanyRecord::new()
            .with_description("We sell flood protection plans")
            .with_business_tags(BusinessTags::Raw("flood,water".into())),
        CompanyRecord::new().with_description("The quick brown fox jumps"),
        CompanyRecord::new()
            .with_description("independent insurance broker")
            .with_category("insurance brokerage"),
        CompanyRecord::new()
            .with_description("claims handling and risk advice")
            .with_business_tags(BusinessTags::List(vec!["broker".into()])),
        CompanyRecord::new()
            .with_description("fresh bread and pastries")
            .with_sector("food"),
        CompanyRecord::new(),
    ]
}

#[test]
fn end_to_end_flood_record_gets_flood_insurance() -> Result<()> {
    let engine = ClassificationEngine::new(taxonomy(&["Flood Insurance", "Auto Insurance"]))?;
    let record = CompanyRecord::new()
        .with_description("We sell flood protection plans")
        .with_business_tags(BusinessTags::Raw("flood,water".into()))
        .with_sector("")
        .with_category("")
        .with_niche("");

    let labels = engine.classify_company(&record)?;
    assert!(labels.contains(&"Flood Insurance".to_string()));
    Ok(())
}

#[test]
fn direct_match_short_circuits_similarity() -> Result<()> {
    let engine = sample_engine()?;

    // Strong similarity material in description and category, trigger only in niche.
    let record = CompanyRecord::new()
        .with_description("independent insurance broker")
        .with_category("insurance brokerage")
        .with_niche("flood");

    assert_eq!(engine.classify_company(&record)?, vec!["Flood Insurance"]);
    Ok(())
}

#[test]
fn records_without_context_get_no_labels() -> Result<()> {
    let engine = sample_engine()?;
    let record = CompanyRecord::new()
        .with_description("The quick brown fox jumps")
        .with_business_tags(BusinessTags::Raw(String::new()))
        .with_sector("")
        .with_category("")
        .with_niche("");

    assert!(engine.classify_company(&record)?.is_empty());
    assert!(engine.classify_company(&CompanyRecord::new())?.is_empty());
    Ok(())
}

#[test]
fn similarity_labels_are_capped_and_validated() -> Result<()> {
    let engine = sample_engine()?;

    for record in sample_records() {
        let normalized = record.normalize();
        let direct = engine
            .keyword_index()
            .find_direct_matches_in(normalized.texts());
        if !direct.is_empty() {
            continue;
        }

        let labels = engine.classify_company(&record)?;
        assert!(labels.len() <= 3);
        assert!(!labels.contains(&"Bakery Supplies".to_string()));
        for label in &labels {
            assert!(engine.is_insurance_label(label));
        }
    }
    Ok(())
}

#[test]
fn raising_the_threshold_removes_similarity_labels() -> Result<()> {
    let config = ClassifierConfig {
        similarity_threshold: 1.0,
        ..Default::default()
    };
    let engine = ClassificationEngine::with_config(
        taxonomy(&["Insurance Brokerage", "Risk Consulting"]),
        config,
    )?;
    let record = CompanyRecord::new()
        .with_description("independent insurance broker")
        .with_category("insurance brokerage");

    // Cosine similarity never exceeds 1, so nothing passes a strict threshold of 1.
    assert!(engine.classify_company(&record)?.is_empty());
    Ok(())
}

#[test]
fn classification_is_deterministic() -> Result<()> {
    let engine = sample_engine()?;
    for record in sample_records() {
        assert_eq!(
            engine.classify_company(&record)?,
            engine.classify_company(&record)?
        );
    }
    Ok(())
}

#[test]
fn batch_preserves_order_and_length() -> Result<()> {
    let engine = sample_engine()?;
    let records = sample_records();

    let sequential = engine.classify_companies(&records)?;
    let parallel = engine.classify_companies_parallel(&records)?;

    assert_eq!(sequential.len(), records.len());
    for (result, record) in sequential.iter().zip(&records) {
        assert_eq!(&result.record, record);
    }
    assert_eq!(sequential, parallel);

    let stats = ClassificationStats::from_results(&sequential);
    assert_eq!(stats.total_companies, records.len());
    assert!(stats.labeled_companies >= 1);
    Ok(())
}

#[test]
fn empty_taxonomy_is_rejected() {
    let result = ClassificationEngine::new(Vec::new());
    assert!(matches!(result, Err(ClassifierError::Initialization(_))));
}

#[test]
fn tag_parsing_examples() {
    assert_eq!(parse_tags("['auto','home']"), vec!["auto", "home"]);
    assert_eq!(parse_tags("auto, home"), vec!["auto", "home"]);
    assert!(parse_tags("[broken").is_empty());
}

#[test]
fn zero_vector_similarity_is_zero() {
    let zero = [0.0; 4];
    for other in [[0.0; 4], [1.0, 2.0, 3.0, 4.0], [-1.0, 0.0, 0.5, 0.0]] {
        let similarity = cosine_similarity(&zero, &other);
        assert_eq!(similarity, 0.0);
        assert!(!similarity.is_nan());
    }
}
