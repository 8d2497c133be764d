use crate::console::ConsoleState;
use crate::error::Result;
use crate::models::{CarteRequest, Compte, CompteQuery, CompteRequest};
use crate::views::filter::filter_comptes;
use crate::views::format::{format_xaf, pad};
use crate::views::modal::CompteModal;
use crate::views::stats::CompteStatistics;

/// Lists accounts. Status and type narrow the fetched page client-side, so
/// a BLOCKED filter finds flagged accounts whatever their nominal status.
pub async fn handle_list(state: &ConsoleState, query: CompteQuery) -> Result<()> {
    let page = state
        .comptes
        .list(&CompteQuery {
            page: query.page,
            size: query.size,
            search: query.search.clone(),
            ..Default::default()
        })
        .await?;
    let comptes: Vec<Compte> =
        filter_comptes(&page, None, query.status, query.compte_type)
            .into_iter()
            .cloned()
            .collect();

    if comptes.is_empty() {
        println!("Aucun compte trouvé.");
        return Ok(());
    }

    println!(
        "{} {} {} {} {} {}",
        pad("ID", 38),
        pad("NUMÉRO", 12),
        pad("CLIENT", 24),
        pad("TYPE", 10),
        pad("STATUT", 12),
        pad("SOLDE", 16),
    );
    for compte in &comptes {
        println!(
            "{} {} {} {} {} {}",
            pad(&compte.id, 38),
            pad(&compte.numero_compte.to_string(), 12),
            pad(&compte.id_client, 24),
            pad(compte.compte_type.as_str(), 10),
            pad(compte.effective_status().label_fr(), 12),
            pad(&format_xaf(compte.solde), 16),
        );
    }

    let stats = CompteStatistics::from_page(&comptes);
    println!(
        "\n{} compte(s): {} actif(s), {} en attente, {} bloqué(s).",
        stats.total_comptes, stats.active_comptes, stats.pending_comptes, stats.blocked_comptes
    );
    println!(
        "Solde cumulé {} (moyenne {}).",
        format_xaf(stats.total_solde),
        format_xaf(stats.average_solde)
    );
    Ok(())
}

pub async fn handle_show(state: &ConsoleState, compte_id: &str) -> Result<()> {
    let compte = state.comptes.details(compte_id).await?;
    println!("{}", CompteModal::View(compte.clone()).banner());
    println!("  Id            : {}", compte.id);
    println!("  Numéro        : {}", compte.numero_compte);
    println!("  Client        : {}", compte.id_client);
    println!("  Agence        : {}", compte.id_agence);
    println!("  Type          : {}", compte.compte_type.as_str());
    println!("  Statut        : {}", compte.effective_status().label_fr());
    println!("  Solde         : {}", format_xaf(compte.solde));
    println!(
        "  Retrait/jour  : {}",
        format_xaf(compte.limite_daily_withdrawal)
    );
    println!(
        "  Virement/jour : {}",
        format_xaf(compte.limite_daily_transfer)
    );
    println!(
        "  Opérations/mois: {}",
        format_xaf(compte.limite_monthly_operations)
    );
    println!("  Transactions  : {}", compte.total_transactions);
    println!("  Volume total  : {}", format_xaf(compte.total_volume));
    Ok(())
}

pub async fn handle_create(state: &ConsoleState, request: CompteRequest) -> Result<()> {
    let numero = request.numero_compte;
    state.comptes.create(&request).await?;
    println!("Compte {numero} créé.\n");
    // Server authoritative: render the re-fetched list, never a local patch.
    handle_list(state, CompteQuery::default()).await
}

pub async fn handle_update(
    state: &ConsoleState,
    compte_id: &str,
    request: CompteRequest,
) -> Result<()> {
    state.comptes.update(compte_id, &request).await?;
    println!("Compte {compte_id} mis à jour.\n");
    handle_list(state, CompteQuery::default()).await
}

pub async fn handle_block(
    state: &ConsoleState,
    compte_id: &str,
    reason: Option<&str>,
) -> Result<()> {
    state.comptes.block(compte_id, reason).await?;
    println!("Compte {compte_id} bloqué.\n");
    handle_show(state, compte_id).await
}

pub async fn handle_unblock(state: &ConsoleState, compte_id: &str) -> Result<()> {
    state.comptes.unblock(compte_id).await?;
    println!("Compte {compte_id} débloqué.\n");
    handle_show(state, compte_id).await
}

/// Confirm-gated: the target is fetched and named before the closing
/// transition is issued.
pub async fn handle_close(state: &ConsoleState, compte_id: &str) -> Result<()> {
    let modal = CompteModal::ConfirmClose(state.comptes.details(compte_id).await?);
    println!("{}", modal.banner());

    state.comptes.close(compte_id).await?;
    println!("Compte {compte_id} fermé.\n");
    handle_show(state, compte_id).await
}

pub async fn handle_create_carte(state: &ConsoleState, request: CarteRequest) -> Result<()> {
    // Resolve the account first: a card request against an unknown compte
    // fails here, before any card payload is sent.
    let modal = CompteModal::CreateCarte(state.comptes.details(&request.compte_id).await?);
    println!("{}", modal.banner());

    let porteur = request.nom_porteur.clone();
    let compte_id = request.compte_id.clone();
    state.comptes.create_carte(&request).await?;
    println!("Carte créée pour {porteur}.\n");
    handle_show(state, &compte_id).await
}
