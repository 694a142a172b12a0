//! Console demo
//!
//! Resolves `ApiConfig` from the environment (`USE_MOCKS=true` works without
//! a backend), signs in, and walks the Produto CRUD flow a screen performs.
//!
//! ```bash
//! USE_MOCKS=true cargo run -p cervejaria-client --example console
//! ```

use std::sync::Arc;

use cervejaria_client::models::{Categoria, Produto};
use cervejaria_client::{
    ApiConfig, AuthContext, FileTokenStore, Navigator, RouteNavigator, build_services, logger,
};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logger::init_logger();

    let config = ApiConfig::from_env()?;
    let store = Arc::new(FileTokenStore::new(std::env::temp_dir().join("cervejaria")));
    let navigator = Arc::new(RouteNavigator::new("/produtos"));
    let services = build_services(&config, AuthContext::new(store, navigator.clone()))?;

    let email = std::env::var("CONSOLE_EMAIL").unwrap_or_else(|_| "admin@cervejaria.com".into());
    let senha = std::env::var("CONSOLE_SENHA").unwrap_or_default();
    match services.sign_in(&email, &senha).await {
        Ok(_) => tracing::info!("Signed in as {email}"),
        Err(e) => tracing::warn!("Sign-in failed: {e}"),
    }

    // fetch, submit, refresh
    for produto in services.produtos.get_all().await? {
        println!(
            "#{:<3} {:<28} R$ {:>8} {:?}",
            produto.id.unwrap_or_default(),
            produto.nome,
            produto.preco,
            produto.categoria
        );
    }

    let created = services
        .produtos
        .create(Produto::new("Chopp de Vinho", Decimal::new(1990, 2), Categoria::Bebida))
        .await?;
    println!("created #{}", created.id.unwrap_or_default());

    let disponiveis = services.produtos.get_disponiveis().await?;
    println!("{} produtos disponiveis", disponiveis.len());

    if let Some(id) = created.id {
        services.produtos.delete(id).await?;
    }
    println!("{} produtos", services.produtos.get_all().await?.len());

    if !navigator.redirects().is_empty() {
        println!("session expired, redirected to {:?}", navigator.current_path());
    }
    services.sign_out()?;
    Ok(())
}
