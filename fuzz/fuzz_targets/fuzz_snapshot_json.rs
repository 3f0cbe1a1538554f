#![no_main]

use libfuzzer_sys::fuzz_target;
use resi::domain::ports::SnapshotRepository;
use resi::infrastructure::repositories::COLLECTIONS;
use resi::infrastructure::{JsonSnapshotRepository, MemoryCollectionStore};

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    let Ok(content) = std::str::from_utf8(rest) else {
        return;
    };

    // Decoding a damaged collection must fail cleanly, never panic
    let store = MemoryCollectionStore::new();
    let name = COLLECTIONS[selector as usize % COLLECTIONS.len()];
    store.insert(name, content);
    let repository = JsonSnapshotRepository::new(store);

    if let Ok(Some(snapshot)) = repository.load() {
        repository.save(&snapshot).unwrap();
        let reloaded = repository.load().unwrap();
        assert_eq!(reloaded, Some(snapshot));
    }
});
