use genius_lyrics::{GeniusClient, GeniusClientImpl};

/// Handle the lyrics command
pub async fn handle_lyrics_command(
    client: &GeniusClientImpl,
    name: &str,
    title: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let artist = client.search_artist(name).await?;
    let songs = client.get_all_songs(&artist).await?;

    let wanted = title.to_lowercase();
    let Some(song) = songs
        .iter()
        .find(|song| song.title.to_lowercase() == wanted)
    else {
        return Err(format!("No song titled '{title}' among {} songs by {artist}", songs.len()).into());
    };

    log::debug!("Matched '{title}' to {:?}", song.url());
    println!("🎵 {} - {}\n", artist.name, song.title);
    println!("{}", client.get_song_lyrics(song).await?);

    Ok(())
}
