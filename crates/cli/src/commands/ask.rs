use anyhow::Result;
use folio_service::AskRequest;

pub(crate) async fn run(question: String, top_k: u32) -> Result<()> {
    let service = super::build_ask_service();
    let answer = service.ask(&AskRequest { question, top_k: top_k.into() }).await?;
    println!("{}", serde_json::to_string_pretty(&answer)?);
    Ok(())
}
