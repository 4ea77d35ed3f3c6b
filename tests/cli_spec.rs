use speculate2::speculate;

speculate! {
    use std::path::Path;
    use std::process::{Command, Output};

    fn run(db_path: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_dealership"))
            .arg("--database")
            .arg(db_path)
            .args(args)
            .env_remove("DEALERSHIP_DATABASE")
            .env("RUST_LOG", "off")
            .output()
            .expect("Failed to run dealership binary")
    }

    fn stdout(output: &Output) -> String {
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    describe "seed" {
        it "seeds once and then reports the existing data" {
            let dir = tempfile::tempdir().unwrap();
            let db = dir.path().join("inventory.db");

            let first = run(&db, &["seed"]);
            assert!(first.status.success());
            assert!(stdout(&first).contains("Inserted 5 manufacturers and 15 car models"));

            let second = run(&db, &["seed"]);
            assert!(second.status.success());
            assert!(stdout(&second).contains("nothing inserted"));

            let status = stdout(&run(&db, &["status"]));
            assert!(status.contains("manufacturers: 5"));
            assert!(status.contains("car models: 15"));
        }

        it "duplicates the example data with --force" {
            let dir = tempfile::tempdir().unwrap();
            let db = dir.path().join("inventory.db");

            run(&db, &["seed"]);
            assert!(run(&db, &["seed", "--force"]).status.success());

            let status = stdout(&run(&db, &["status"]));
            assert!(status.contains("manufacturers: 10"));
            assert!(status.contains("car models: 30"));
        }
    }

    describe "cars" {
        it "seeds an empty catalog before listing" {
            let dir = tempfile::tempdir().unwrap();
            let db = dir.path().join("inventory.db");

            let output = run(&db, &["cars"]);
            assert!(output.status.success());
            let listing = stdout(&output);
            assert_eq!(listing.lines().count(), 15);
            assert!(listing.contains("Toyota Corolla  Sedan  2023  dealer 5"));
        }

        it "filters and searches" {
            let dir = tempfile::tempdir().unwrap();
            let db = dir.path().join("inventory.db");

            let listing = stdout(&run(&db, &["cars", "--search", "toyota", "--category", "sedan"]));
            let lines: Vec<_> = listing.lines().collect();
            assert_eq!(lines.len(), 2);
            assert!(lines[0].contains("Toyota Corolla"));
            assert!(lines[1].contains("Toyota Camry"));
        }

        it "prints JSON" {
            let dir = tempfile::tempdir().unwrap();
            let db = dir.path().join("inventory.db");

            let output = stdout(&run(&db, &["cars", "--year", "2023", "--search", "A-Class", "--json"]));
            let models: serde_json::Value = serde_json::from_str(&output).unwrap();
            let models = models.as_array().unwrap();
            assert_eq!(models.len(), 1);
            assert_eq!(models[0]["name"], "A-Class");
            assert_eq!(models[0]["category"], "SUV");
            assert_eq!(models[0]["manufacturer"]["name"], "Mercedes");
        }

        it "rejects an unknown category" {
            let dir = tempfile::tempdir().unwrap();
            let db = dir.path().join("inventory.db");

            let output = run(&db, &["cars", "--category", "Truck"]);
            assert!(!output.status.success());
            assert!(String::from_utf8_lossy(&output.stderr).contains("unknown category"));
        }
    }

    describe "delete-make" {
        it "removes the manufacturer and its models" {
            let dir = tempfile::tempdir().unwrap();
            let db = dir.path().join("inventory.db");
            run(&db, &["seed"]);

            let makes = stdout(&run(&db, &["makes", "--search", "kia"]));
            let id = makes.split_whitespace().next().unwrap().to_string();

            let output = run(&db, &["delete-make", &id]);
            assert!(output.status.success());
            assert!(stdout(&output).contains("and 3 car models"));

            let status = stdout(&run(&db, &["status"]));
            assert!(status.contains("manufacturers: 4"));
            assert!(status.contains("car models: 12"));
        }

        it "fails for an unknown manufacturer" {
            let dir = tempfile::tempdir().unwrap();
            let db = dir.path().join("inventory.db");

            let output = run(&db, &["delete-make", "00000000-0000-0000-0000-000000000000"]);
            assert!(!output.status.success());
        }
    }
}
