use crate::console::ConsoleState;
use crate::error::Result;
use crate::models::{Agence, AgenceRequest};
use crate::views::filter::filter_agences;
use crate::views::format::{format_xaf, pad};
use crate::views::modal::AgenceModal;
use crate::views::stats::AgenceStatistics;

/// Lists agencies, narrowed client-side when a filter is given (the list
/// endpoint has no server-side search).
pub async fn handle_list(state: &ConsoleState, filter: Option<&str>) -> Result<()> {
    let page = state.agences.list().await?;
    let agences: Vec<&Agence> = filter_agences(&page, filter.unwrap_or(""));

    if agences.is_empty() {
        println!("Aucune agence trouvée.");
        return Ok(());
    }

    println!(
        "{} {} {} {} {} {}",
        pad("ID", 38),
        pad("CODE", 10),
        pad("NOM", 24),
        pad("VILLE", 14),
        pad("CAPITAL", 16),
        pad("DISPONIBLE", 16),
    );
    for agence in &agences {
        println!(
            "{} {} {} {} {} {}",
            pad(&agence.id_agence, 38),
            pad(&agence.code_agence, 10),
            pad(&agence.nom, 24),
            pad(&agence.ville, 14),
            pad(&format_xaf(agence.capital), 16),
            pad(&format_xaf(agence.solde_disponible), 16),
        );
    }

    let shown: Vec<Agence> = agences.into_iter().cloned().collect();
    let stats = AgenceStatistics::from_page(&shown);
    println!(
        "\n{} agence(s) dans {} ville(s), capital cumulé {}.",
        stats.total_agences,
        stats.villes,
        format_xaf(stats.total_capital)
    );
    Ok(())
}

pub async fn handle_show(state: &ConsoleState, agence_id: &str) -> Result<()> {
    let agence = state.agences.details(agence_id).await?;
    println!("{}", AgenceModal::View(agence.clone()).banner());
    println!("  Id            : {}", agence.id_agence);
    println!("  Code          : {}", agence.code_agence);
    println!("  Nom           : {}", agence.nom);
    println!("  Adresse       : {}", agence.adresse.as_deref().unwrap_or("—"));
    println!("  Ville         : {}", agence.ville);
    println!("  Email         : {}", agence.email.as_deref().unwrap_or("—"));
    println!(
        "  Téléphone     : {}",
        agence.telephone.as_deref().unwrap_or("—")
    );
    println!("  Capital       : {}", format_xaf(agence.capital));
    println!("  Disponible    : {}", format_xaf(agence.solde_disponible));
    println!(
        "  Limite jour   : {}",
        format_xaf(agence.limite_daily_transactions)
    );
    println!(
        "  Limite mois   : {}",
        format_xaf(agence.limite_monthly_transactions)
    );
    Ok(())
}

pub async fn handle_create(state: &ConsoleState, request: AgenceRequest) -> Result<()> {
    let code = request.code_agence.clone();
    state.agences.create(&request).await?;
    println!("Agence {code} créée.\n");
    // Server authoritative: render the re-fetched list, never a local patch.
    handle_list(state, None).await
}

pub async fn handle_update(
    state: &ConsoleState,
    agence_id: &str,
    request: AgenceRequest,
) -> Result<()> {
    state.agences.update(agence_id, &request).await?;
    println!("Agence {agence_id} mise à jour.\n");
    handle_list(state, None).await
}

/// Confirm-gated: the target is fetched and named before the deletion is
/// issued, so a bad id fails loudly instead of deleting silently.
pub async fn handle_delete(state: &ConsoleState, agence_id: &str) -> Result<()> {
    let modal = AgenceModal::ConfirmDelete(state.agences.details(agence_id).await?);
    println!("{}", modal.banner());

    state.agences.delete(agence_id).await?;
    println!("Agence {agence_id} supprimée.\n");
    handle_list(state, None).await
}
