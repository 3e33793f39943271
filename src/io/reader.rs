//! CSV readers for taxonomy labels and company records.
//!
//! Both readers expect a header row. Company headers are matched loosely:
//! `Business Tags`, `business-tags` and `business_tags` all map onto the same
//! field.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use log::{debug, warn};

use crate::classifier::record::{BusinessTags, CompanyRecord};
use crate::error::{ClassifierError, Result};

/// Column holding the label in a taxonomy file.
const LABEL_COLUMN: &str = "label";

/// Read taxonomy labels from a CSV file.
pub fn read_taxonomy<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let file = File::open(path.as_ref())?;
    let labels = read_taxonomy_from(file)?;
    debug!(
        "Read {} taxonomy labels from {}",
        labels.len(),
        path.as_ref().display()
    );
    Ok(labels)
}

/// Read taxonomy labels from any CSV source.
///
/// Values come from the `label` column when there is one and the cell is not
/// empty, otherwise from the first column. Rows left blank are skipped.
pub fn read_taxonomy_from<R: Read>(input: R) -> Result<Vec<String>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    if headers.is_empty() {
        return Err(ClassifierError::initialization("taxonomy file has no header"));
    }
    let label_column = headers
        .iter()
        .position(|h| normalize_header(h) == LABEL_COLUMN);

    let mut labels = Vec::new();
    for row in reader.records() {
        let row = row?;
        let label = label_column
            .and_then(|column| row.get(column))
            .filter(|label| !label.is_empty())
            .or_else(|| row.get(0));
        match label {
            Some(label) if !label.is_empty() => labels.push(label.to_string()),
            _ => {}
        }
    }

    Ok(labels)
}

/// Read company records from a CSV file.
pub fn read_companies<P: AsRef<Path>>(path: P) -> Result<Vec<CompanyRecord>> {
    let file = File::open(path.as_ref())?;
    let companies = read_companies_from(file)?;
    debug!(
        "Read {} companies from {}",
        companies.len(),
        path.as_ref().display()
    );
    Ok(companies)
}

/// Read company records from any CSV source.
///
/// Rows that cannot be parsed are logged and skipped. Columns other than the
/// five known fields are kept in [`CompanyRecord::extra`].
pub fn read_companies_from<R: Read>(input: R) -> Result<Vec<CompanyRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(input);

    let headers = reader.headers()?.clone();
    let mut companies = Vec::new();

    for (line, row) in reader.records().enumerate() {
        match row {
            Ok(row) => companies.push(company_from_row(&headers, &row)),
            // Line numbers are 1-based and count the header.
            Err(e) => warn!("Skipping company row {}: {}", line + 2, e),
        }
    }

    Ok(companies)
}

fn company_from_row(headers: &StringRecord, row: &StringRecord) -> CompanyRecord {
    let mut company = CompanyRecord::new();

    for (header, value) in headers.iter().zip(row.iter()) {
        let text = || (!value.is_empty()).then(|| value.to_string());
        match normalize_header(header).as_str() {
            "description" => company.description = text(),
            "business_tags" => company.business_tags = text().map(BusinessTags::Raw),
            "sector" => company.sector = text(),
            "category" => company.category = text(),
            "niche" => company.niche = text(),
            _ => {
                company
                    .extra
                    .insert(header.to_string(), serde_json::Value::String(value.to_string()));
            }
        }
    }

    company
}

/// Trim, lowercase, and turn spaces and hyphens into underscores.
fn normalize_header(header: &str) -> String {
    header
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| if c == ' ' || c == '-' { '_' } else { c })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_header() {
        assert_eq!(normalize_header(" Business Tags "), "business_tags");
        assert_eq!(normalize_header("business-tags"), "business_tags");
        assert_eq!(normalize_header("Niche"), "niche");
    }

    #[test]
    fn test_read_taxonomy_label_column() {
        let csv = "id,label\n1,Life Insurance\n,\n3, Flood Insurance \n";
        let labels = read_taxonomy_from(csv.as_bytes()).unwrap();
        assert_eq!(labels, vec!["Life Insurance", "Flood Insurance"]);
    }

    #[test]
    fn test_read_taxonomy_empty_label_falls_back_to_first_column() {
        let csv = "code,label\nLIFE,Life Insurance\nMarine Cargo Cover,\n,\n";
        let labels = read_taxonomy_from(csv.as_bytes()).unwrap();
        assert_eq!(labels, vec!["Life Insurance", "Marine Cargo Cover"]);
    }

    #[test]
    fn test_read_taxonomy_first_column() {
        let csv = "name\nAuto Insurance\nCrop Insurance\n";
        let labels = read_taxonomy_from(csv.as_bytes()).unwrap();
        assert_eq!(labels, vec!["Auto Insurance", "Crop Insurance"]);
    }

    #[test]
    fn test_read_companies() {
        let csv = "\
Description,Business Tags,Sector,Category,Niche,Website
\"Marine cargo, freight\",\"['Shipping', 'Logistics']\",Services,,Ports,example.com
Bakery,,,,,
";
        let companies = read_companies_from(csv.as_bytes()).unwrap();
        assert_eq!(companies.len(), 2);

        let first = &companies[0];
        assert_eq!(first.description.as_deref(), Some("Marine cargo, freight"));
        assert_eq!(
            first.business_tags,
            Some(BusinessTags::Raw("['Shipping', 'Logistics']".to_string()))
        );
        assert_eq!(first.sector.as_deref(), Some("Services"));
        assert_eq!(first.category, None);
        assert_eq!(first.niche.as_deref(), Some("Ports"));
        assert_eq!(
            first.extra.get("Website"),
            Some(&serde_json::json!("example.com"))
        );
        assert_eq!(first.normalize().tags, vec!["shipping", "logistics"]);

        let second = &companies[1];
        assert_eq!(second.description.as_deref(), Some("Bakery"));
        assert_eq!(second.business_tags, None);
    }

    #[test]
    fn test_field_name_headers_and_title_headers_agree() {
        let by_field = "description,business_tags,sector,category,niche\nBroker,\"a, b\",Finance,Agencies,Life\n";
        let by_title = "Description,Business Tags,Sector,Category,Niche\nBroker,\"a, b\",Finance,Agencies,Life\n";

        let by_field = read_companies_from(by_field.as_bytes()).unwrap();
        let by_title = read_companies_from(by_title.as_bytes()).unwrap();

        assert_eq!(by_field, by_title);
        assert_eq!(by_field[0].niche.as_deref(), Some("Life"));
        assert!(by_field[0].extra.is_empty());
    }

    #[test]
    fn test_short_rows_leave_fields_empty() {
        let csv = "description,sector,niche\nBroker\n";
        let companies = read_companies_from(csv.as_bytes()).unwrap();
        assert_eq!(companies.len(), 1);
        assert_eq!(companies[0].description.as_deref(), Some("Broker"));
        assert_eq!(companies[0].sector, None);
    }

    #[test]
    fn test_missing_file() {
        let err = read_taxonomy("/nonexistent/taxonomy.csv").unwrap_err();
        assert!(matches!(err, ClassifierError::Io(_)));
    }
}
