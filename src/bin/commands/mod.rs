pub mod artist;
pub mod lyrics;
pub mod songs;

use clap::Subcommand;
use genius_lyrics::GeniusClientImpl;

#[derive(Subcommand)]
pub enum Commands {
    /// Resolve an artist name to Genius' canonical name and id
    ///
    /// Usage examples:
    /// # Find out how Genius spells Tupac
    /// genius-lyrics artist tupac
    Artist {
        /// Artist name as you would type it
        name: String,

        /// Results page to read
        #[arg(long, default_value = "1")]
        page: u32,

        /// Results per page
        #[arg(long, default_value = "5")]
        per_page: u32,
    },

    /// List an artist's most popular songs
    ///
    /// Without --all a single page of up to 20 songs is shown.
    ///
    /// Usage examples:
    /// # Second page of songs
    /// genius-lyrics songs "2pac" --page 2
    ///
    /// # Up to 100 songs with their lyrics page URLs
    /// genius-lyrics songs "2pac" --all --urls
    Songs {
        /// Artist name
        name: String,

        /// Walk all five pages instead of one
        #[arg(long)]
        all: bool,

        /// Page to show when --all is not given
        #[arg(long, default_value = "1")]
        page: u32,

        /// Print each song's lyrics page URL
        #[arg(long)]
        urls: bool,
    },

    /// Print the lyrics of one song
    ///
    /// The title is matched case-insensitively against the artist's top 100
    /// songs.
    ///
    /// Usage examples:
    /// genius-lyrics lyrics "2pac" "changes"
    Lyrics {
        /// Artist name
        name: String,

        /// Song title
        title: String,
    },
}

pub async fn execute_command(
    command: Commands,
    client: &GeniusClientImpl,
) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Artist {
            name,
            page,
            per_page,
        } => artist::handle_artist_command(client, &name, page, per_page).await,
        Commands::Songs {
            name,
            all,
            page,
            urls,
        } => songs::handle_songs_command(client, &name, all, page, urls).await,
        Commands::Lyrics { name, title } => {
            lyrics::handle_lyrics_command(client, &name, &title).await
        }
    }
}
