use genius_lyrics::{GeniusClient, GeniusClientImpl, SongSummary, SONGS_PER_PAGE};

/// Handle the songs command
pub async fn handle_songs_command(
    client: &GeniusClientImpl,
    name: &str,
    all: bool,
    page: u32,
    urls: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let artist = client.search_artist(name).await?;
    println!("🎤 Songs by {artist}");

    let songs = if all {
        client.get_all_songs(&artist).await?
    } else {
        client.search_song(&artist, page, SONGS_PER_PAGE).await?.songs
    };

    if songs.is_empty() {
        println!("No songs found on page {page}");
        return Ok(());
    }

    for (index, song) in songs.iter().enumerate() {
        print_song(index + 1, song, urls);
    }
    println!("\n{} song(s)", songs.len());

    Ok(())
}

fn print_song(number: usize, song: &SongSummary, urls: bool) {
    match (urls, song.url()) {
        (true, Some(url)) => println!("{number:3}. {} <{url}>", song.title),
        _ => println!("{number:3}. {}", song.title),
    }
}
