use shared_types::*;
use std::fs;
use std::path::Path;
use ts_rs::TS;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Generate TypeScript definitions for API types
    let mut types = Vec::new();

    // Company types
    types.push(clean_type(Company::export_to_string()?));
    types.push(clean_type(CreateCompanyRequest::export_to_string()?));
    types.push(clean_type(CompaniesResponse::export_to_string()?));

    // Contact types
    types.push(clean_type(Contact::export_to_string()?));
    types.push(clean_type(CreateContactRequest::export_to_string()?));
    types.push(clean_type(ContactsResponse::export_to_string()?));

    // Deal types
    types.push(clean_type(DealStage::export_to_string()?));
    types.push(clean_type(Deal::export_to_string()?));
    types.push(clean_type(CreateDealRequest::export_to_string()?));
    types.push(clean_type(DealsResponse::export_to_string()?));

    // Interaction types
    types.push(clean_type(Interaction::export_to_string()?));
    types.push(clean_type(ProcessInteractionRequest::export_to_string()?));
    types.push(clean_type(InteractionsResponse::export_to_string()?));

    // Insight types
    types.push(clean_type(Sentiment::export_to_string()?));
    types.push(clean_type(InterestLevel::export_to_string()?));
    types.push(clean_type(NormalizedAnalysis::export_to_string()?));
    types.push(clean_type(Insight::export_to_string()?));
    types.push(clean_type(InsightsResponse::export_to_string()?));

    let output_dir = Path::new("../gui/src/api-types");
    fs::create_dir_all(output_dir)?;

    let output_path = output_dir.join("types.ts");
    let output = types.join("\n\n");

    fs::write(&output_path, output)?;
    println!("Generated TypeScript types in {}", output_path.display());

    Ok(())
}

fn clean_type(mut type_def: String) -> String {
    type_def.retain(|c| c != '\r');

    // Keep import lines only when a type genuinely references another type
    let lines: Vec<&str> = type_def.lines().collect();
    let has_import = lines
        .iter()
        .any(|line| line.trim().starts_with("import type"));

    let filtered: Vec<&str> = lines
        .iter()
        .filter(|line| {
            let trimmed = line.trim();
            if trimmed.starts_with("import type") {
                return has_import;
            }
            // Filter out the generated comment line
            !trimmed.starts_with("// This file was generated")
                && !trimmed.starts_with("/* This file was generated")
        })
        .cloned()
        .collect();

    let result = filtered.join("\n").trim().to_string();
    if result.is_empty() {
        result
    } else {
        format!("{}\n", result)
    }
}
