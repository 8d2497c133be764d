use crate::console::ConsoleState;
use crate::error::Result;
use crate::models::{DocumentReview, PendingQuery};
use crate::views::format::{format_opt_date_fr, format_score, pad};
use crate::workflow::{liveness_label, Decision, ScoreGrade};

/// Lists pending documents with the given query and prints the table.
pub async fn handle_list(state: &ConsoleState, query: PendingQuery) -> Result<()> {
    state.workflow.set_query(query).await;
    let count = state.workflow.refresh().await?;
    let documents = state.workflow.documents().await;

    if documents.is_empty() {
        println!("Aucun document en attente.");
        return Ok(());
    }

    println!(
        "{} {} {} {} {}",
        pad("ID", 38),
        pad("CNI", 14),
        pad("CLIENT", 24),
        pad("TYPE", 10),
        pad("SOUMIS LE", 18),
    );
    for doc in &documents {
        println!(
            "{} {} {} {} {}",
            pad(&doc.id, 38),
            pad(doc.cni.as_deref().unwrap_or("—"), 14),
            pad(doc.nom_client.as_deref().unwrap_or("—"), 24),
            pad(doc.document_type.as_deref().unwrap_or("—"), 10),
            format_opt_date_fr(doc.uploaded_at.as_ref()),
        );
    }
    println!("\n{count} document(s) en attente.");
    Ok(())
}

/// Shows the full review detail for one document.
pub async fn handle_review(state: &ConsoleState, document_id: &str) -> Result<()> {
    state.workflow.refresh().await?;
    let review = state.workflow.select(document_id).await?;
    print_review(&review);
    state.workflow.close().await;
    Ok(())
}

/// Approves one document through the review workflow.
pub async fn handle_approve(
    state: &ConsoleState,
    document_id: &str,
    comment: Option<String>,
) -> Result<()> {
    state.workflow.refresh().await?;
    state.workflow.select(document_id).await?;
    match state.workflow.approve(comment).await? {
        Decision::Approved => println!("Document {document_id} approuvé."),
        Decision::Ignored => println!("Une décision est déjà en cours pour ce document."),
        Decision::Rejected => {}
    }
    Ok(())
}

/// Rejects one document; a non-empty reason is mandatory.
pub async fn handle_reject(
    state: &ConsoleState,
    document_id: &str,
    reason: &str,
    comment: Option<String>,
) -> Result<()> {
    state.workflow.refresh().await?;
    state.workflow.select(document_id).await?;
    match state.workflow.reject(reason, comment).await? {
        Decision::Rejected => println!("Document {document_id} rejeté."),
        Decision::Ignored => println!("Une décision est déjà en cours pour ce document."),
        Decision::Approved => {}
    }
    Ok(())
}

pub async fn handle_statistics(
    state: &ConsoleState,
    period: Option<&str>,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<()> {
    let stats = state
        .documents
        .statistics(period.unwrap_or("daily"), start, end)
        .await?;
    println!("Documents totaux   : {}", stats.total_documents);
    println!("En attente         : {}", stats.pending_count);
    println!("Approuvés          : {}", stats.approved_count);
    println!("Rejetés            : {}", stats.rejected_count);
    println!(
        "Délai moyen        : {:.1} h",
        stats.average_processing_hours
    );
    Ok(())
}

pub async fn handle_bulk_approve(
    state: &ConsoleState,
    ids: &[String],
    comment: Option<&str>,
) -> Result<()> {
    state.documents.bulk_approve(ids, comment).await?;
    println!("{} document(s) approuvé(s).", ids.len());
    Ok(())
}

pub async fn handle_bulk_reject(
    state: &ConsoleState,
    ids: &[String],
    reason: &str,
    comment: Option<&str>,
) -> Result<()> {
    state.documents.bulk_reject(ids, reason, comment).await?;
    println!("{} document(s) rejeté(s).", ids.len());
    Ok(())
}

fn print_review(review: &DocumentReview) {
    println!("Document {}", review.id);
    println!("  CNI           : {}", review.cni.as_deref().unwrap_or("—"));
    println!("  Statut        : {}", review.status.label_fr());
    println!(
        "  Soumis le     : {}",
        format_opt_date_fr(review.uploaded_at.as_ref())
    );

    println!("\nIdentité extraite");
    println!(
        "  Nom           : {}",
        review.nom_extrait.as_deref().unwrap_or("—")
    );
    println!(
        "  Prénom        : {}",
        review.prenom_extrait.as_deref().unwrap_or("—")
    );
    println!(
        "  Né(e) le      : {}",
        review
            .date_naissance_extraite
            .map(|d| d.format("%d/%m/%Y").to_string())
            .unwrap_or_else(|| "—".to_string())
    );
    println!(
        "  Lieu          : {}",
        review.lieu_naissance_extrait.as_deref().unwrap_or("—")
    );

    println!("\nVérification");
    print_score("Qualité document", review.quality_score);
    print_score("Qualité selfie", review.selfie_quality_score);
    print_score("Similarité faciale", review.selfie_similarity_score);
    println!(
        "  Vivacité      : {}",
        liveness_label(review.liveness_detected)
    );
    if let Some(reco) = &review.facial_verification_recommendation {
        println!("  Recommandation: {reco}");
    }

    if !review.anomalies_detectees.is_empty() {
        println!("\nAnomalies document");
        for anomaly in &review.anomalies_detectees {
            println!("  - {anomaly}");
        }
    }
    if !review.selfie_anomalies.is_empty() {
        println!("\nAnomalies selfie");
        for anomaly in &review.selfie_anomalies {
            println!("  - {anomaly}");
        }
    }

    println!("\nPièces jointes");
    print_attachment("Recto", review.recto_image_base64.as_deref());
    print_attachment("Verso", review.verso_image_base64.as_deref());
    print_attachment("Selfie", review.selfie_image_base64.as_deref());
}

fn print_score(label: &str, score: f64) {
    let grade = ScoreGrade::from_score(score);
    println!(
        "  {}: {} (niveau {})",
        pad(label, 14),
        format_score(score),
        grade.label_fr()
    );
}

fn print_attachment(label: &str, payload: Option<&str>) {
    match payload {
        Some(data) => println!("  {}: {} octets (base64)", pad(label, 14), data.len()),
        None => println!("  {}: absente", pad(label, 14)),
    }
}
