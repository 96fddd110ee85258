use anyhow::Result;
use wd_app::WardrobeStore;

use super::format::lines;
use super::Rendered;
use crate::cli::PhotoCommand;

pub async fn run(command: PhotoCommand, store: &mut WardrobeStore) -> Result<Rendered> {
    match command {
        PhotoCommand::Add { uri } => {
            store.add_outfit_photo(uri.clone()).await;
            Rendered::new(&uri, format!("Added photo {uri}"))
        }
        PhotoCommand::Remove { uri } => {
            let removed = store.remove_outfit_photo(&uri).await;
            Rendered::new(&removed, format!("Removed {removed} photo(s)"))
        }
        PhotoCommand::List => {
            let photos = store.wardrobe().outfit_photos();
            Rendered::new(photos, lines(photos.iter().cloned(), "No photos."))
        }
    }
}
