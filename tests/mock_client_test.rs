#[cfg(feature = "mock")]
mod mock_tests {
    use genius_lyrics::{
        ArtistIdentity, GeniusClient, GeniusError, MockGeniusClient, Result, SongPage,
        SongSummary,
    };
    use mockall::predicate::*; // for eq(), any(), etc.
    use serde_json::json;

    #[tokio::test]
    async fn test_mock_search() -> Result<()> {
        let mut mock_client = MockGeniusClient::new();

        mock_client
            .expect_search()
            .with(eq("tupac"), eq(1), eq(5))
            .times(1)
            .returning(|_, _, _| Ok(ArtistIdentity::new("2Pac", 42)));

        // Use the mock as a trait object
        let client: &dyn GeniusClient = &mock_client;
        let artist = client.search("tupac", 1, 5).await?;

        assert_eq!(artist.name, "2Pac");
        assert_eq!(artist.id, 42);

        Ok(())
    }

    #[tokio::test]
    async fn test_mock_search_song() -> Result<()> {
        let mut mock_client = MockGeniusClient::new();

        let expected_page = SongPage {
            songs: vec![SongSummary::new(
                "Changes",
                json!({ "title": "Changes", "url": "https://genius.com/2pac-changes-lyrics" }),
            )],
            page_number: 2,
        };

        mock_client
            .expect_search_song()
            .withf(|artist, page, per_page| artist.id == 42 && *page == 2 && *per_page == 20)
            .times(1)
            .returning(move |_, _, _| Ok(expected_page.clone()));

        let client: &dyn GeniusClient = &mock_client;
        let page = client
            .search_song(&ArtistIdentity::new("2Pac", 42), 2, 20)
            .await?;

        assert_eq!(page.titles(), vec!["Changes"]);
        assert_eq!(page.page_number, 2);

        Ok(())
    }

    #[tokio::test]
    async fn test_mock_lyrics_error() {
        let mut mock_client = MockGeniusClient::new();

        mock_client
            .expect_get_song_lyrics()
            .times(1)
            .returning(|_| Err(GeniusError::Upstream { status: 404 }));

        let client: &dyn GeniusClient = &mock_client;
        let song = SongSummary::new("Gone", json!({ "url": "https://genius.com/gone-lyrics" }));
        let result = client.get_song_lyrics(&song).await;

        assert!(matches!(result, Err(GeniusError::Upstream { status: 404 })));
    }
}
