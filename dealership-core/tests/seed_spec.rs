use speculate2::speculate;

speculate! {
    use dealership_core::models::*;
    use dealership_core::{Database, SeedOutcome};

    fn setup_db() -> Database {
        let db = Database::open_memory().expect("Failed to create test database");
        db.migrate().expect("Failed to migrate test database");
        db
    }

    describe "populate" {
        it "creates five manufacturers and fifteen models" {
            let db = setup_db();
            let summary = db.populate().unwrap();

            assert_eq!(summary.manufacturers.len(), 5);
            assert_eq!(summary.car_models.len(), 15);
            assert_eq!(db.count_manufacturers().unwrap(), 5);
            assert_eq!(db.count_car_models().unwrap(), 15);
        }

        it "creates manufacturers in fixture order" {
            let db = setup_db();
            db.populate().unwrap();

            let names: Vec<_> = db
                .get_all_manufacturers()
                .unwrap()
                .into_iter()
                .map(|m| m.name)
                .collect();
            assert_eq!(names, ["NISSAN", "Mercedes", "Audi", "Kia", "Toyota"]);
        }

        it "groups every three consecutive models under one manufacturer and dealer" {
            let db = setup_db();
            let summary = db.populate().unwrap();

            for (i, group) in summary.car_models.chunks(3).enumerate() {
                let maker = &summary.manufacturers[i];
                for model in group {
                    assert_eq!(model.manufacturer_id, maker.id);
                    assert_eq!(model.dealer_id, i as i64 + 1);
                    assert_eq!(model.model_year, 2023);
                }
            }

            let stored = db.list_car_models(&CarModelFilter::default()).unwrap();
            let stored_ids: Vec<_> = stored.iter().map(|m| m.model.id).collect();
            let created_ids: Vec<_> = summary.car_models.iter().map(|m| m.id).collect();
            assert_eq!(stored_ids, created_ids);
        }

        it "uses the fixture display names and categories" {
            let db = setup_db();
            db.populate().unwrap();

            let toyota: Vec<_> = db
                .list_car_models(&CarModelFilter {
                    search: Some("toyota".into()),
                    ..Default::default()
                })
                .unwrap();
            let shown: Vec<_> = toyota.iter().map(|m| (m.to_string(), m.model.category)).collect();
            assert_eq!(
                shown,
                [
                    ("Toyota Corolla".to_string(), Category::Sedan),
                    ("Toyota Camry".to_string(), Category::Sedan),
                    ("Toyota Kluger".to_string(), Category::Suv),
                ]
            );

            let sedans = db
                .list_car_models(&CarModelFilter {
                    category: Some(Category::Sedan),
                    ..Default::default()
                })
                .unwrap();
            assert_eq!(sedans.len(), 3);
        }

        it "finds exactly the Toyota manufacturer and its models by name" {
            let db = setup_db();
            db.populate().unwrap();

            let makers = db.search_manufacturers("TOYOTA").unwrap();
            assert_eq!(makers.len(), 1);
            assert_eq!(makers[0].name, "Toyota");

            let models = db.list_car_models_for_manufacturer(makers[0].id).unwrap();
            assert_eq!(models.len(), 3);
        }

        it "duplicates every row when run twice" {
            let db = setup_db();
            db.populate().unwrap();
            db.populate().unwrap();

            assert_eq!(db.count_manufacturers().unwrap(), 10);
            assert_eq!(db.count_car_models().unwrap(), 30);
        }

        it "writes nothing when the schema rejects a row" {
            let db = setup_db();
            db.with_connection(|conn| {
                Ok(conn.execute_batch(
                    "CREATE TRIGGER reject_kluger BEFORE INSERT ON car_models
                     WHEN NEW.name = 'Kluger'
                     BEGIN SELECT RAISE(ABORT, 'no Kluger'); END;",
                )?)
            })
            .unwrap();

            assert!(db.populate().is_err());
            assert_eq!(db.count_manufacturers().unwrap(), 0);
            assert_eq!(db.count_car_models().unwrap(), 0);
        }
    }

    describe "seed_if_empty" {
        it "seeds an empty catalog" {
            let db = setup_db();

            match db.seed_if_empty().unwrap() {
                SeedOutcome::Seeded(summary) => {
                    assert_eq!(summary.manufacturers.len(), 5);
                    assert_eq!(summary.car_models.len(), 15);
                }
                other => panic!("expected a seeded catalog, got {:?}", other),
            }
        }

        it "does nothing on a second run" {
            let db = setup_db();
            db.seed_if_empty().unwrap();

            let outcome = db.seed_if_empty().unwrap();
            assert!(matches!(
                outcome,
                SeedOutcome::AlreadyPopulated { manufacturers: 5, car_models: 15 }
            ));
            assert_eq!(db.count_manufacturers().unwrap(), 5);
            assert_eq!(db.count_car_models().unwrap(), 15);
        }

        it "leaves a catalog with its own data alone" {
            let db = setup_db();
            db.create_manufacturer(CreateManufacturerInput {
                name: "Subaru".into(),
                description: "Great cars. Japanese technology".into(),
            })
            .unwrap();

            let outcome = db.seed_if_empty().unwrap();
            assert!(matches!(
                outcome,
                SeedOutcome::AlreadyPopulated { manufacturers: 1, car_models: 0 }
            ));
        }

        it "persists across reopening a database file" {
            let dir = tempfile::tempdir().unwrap();
            let path = dir.path().join("inventory.db");

            {
                let db = Database::open(&path).unwrap();
                db.migrate().unwrap();
                db.seed_if_empty().unwrap();
            }

            let db = Database::open(&path).unwrap();
            db.migrate().unwrap();
            assert!(matches!(db.seed_if_empty().unwrap(), SeedOutcome::AlreadyPopulated { .. }));
            assert_eq!(db.count_car_models().unwrap(), 15);
        }
    }
}
