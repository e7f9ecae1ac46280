use client::customization::{SelectionMap, SkinMaterial, randomize_selections, resolve_locks};
use common::{Asset, Catalog, Category, CategoryId};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rand::SeedableRng;
use rand::rngs::StdRng;

/// `categories` slots with eight assets each; every other asset hides the
/// next two categories.
fn sample_catalog(categories: usize) -> Catalog {
    let mut slots = Vec::with_capacity(categories);
    let mut assets = Vec::with_capacity(categories * 8);

    for index in 0..categories {
        let id = CategoryId::new(format!("cat-{index:03}"));
        slots.push(Category {
            id: id.clone(),
            name: format!("Category {index}"),
            position: index as i64,
            removable: index % 3 == 0,
            palette: vec!["red".parse().unwrap(), "#00ff00".parse().unwrap()],
            starting_asset: None,
            assets: Vec::new(),
        });

        for variant in 0..8 {
            let locks = if variant % 2 == 1 {
                (1..=2)
                    .map(|offset| CategoryId::new(format!("cat-{:03}", (index + offset) % categories)))
                    .filter(|target| target != &id)
                    .collect()
            } else {
                Vec::new()
            };
            assets.push(Asset {
                id: format!("asset-{index:03}-{variant}").into(),
                category: id.clone(),
                name: format!("Asset {index}/{variant}"),
                thumbnail: String::new(),
                model: String::new(),
                locks,
            });
        }
    }

    Catalog::assemble(slots, assets).unwrap()
}

fn bench_resolve_locks(c: &mut Criterion) {
    for size in [8usize, 64, 256] {
        let catalog = sample_catalog(size);
        let skin = SkinMaterial::new("#e0ac69".parse().unwrap());
        let selections: SelectionMap =
            randomize_selections(&catalog, None, &skin, &mut StdRng::seed_from_u64(7));

        c.bench_with_input(
            BenchmarkId::new("resolve_locks", size),
            &(catalog, selections),
            |b, (catalog, selections)| {
                b.iter(|| resolve_locks(black_box(catalog), black_box(selections)));
            },
        );
    }
}

fn bench_randomize(c: &mut Criterion) {
    let catalog = sample_catalog(64);
    let skin = SkinMaterial::new("#e0ac69".parse().unwrap());
    let mut rng = StdRng::seed_from_u64(11);

    c.bench_function("randomize_selections/64", |b| {
        b.iter(|| randomize_selections(black_box(&catalog), None, &skin, &mut rng));
    });
}

fn customization_benches(c: &mut Criterion) {
    bench_resolve_locks(c);
    bench_randomize(c);
}

criterion_group!(benches, customization_benches);
criterion_main!(benches);
