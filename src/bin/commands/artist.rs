use genius_lyrics::{GeniusClient, GeniusClientImpl};

/// Handle the artist command
pub async fn handle_artist_command(
    client: &GeniusClientImpl,
    name: &str,
    page: u32,
    per_page: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    let artist = client.search(name, page, per_page).await?;
    println!("🎤 {} (id {})", artist.name, artist.id);
    Ok(())
}
