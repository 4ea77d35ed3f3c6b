pub const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS manufacturers (
    id TEXT PRIMARY KEY,
    name TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 100),
    description TEXT NOT NULL,
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS car_models (
    id TEXT PRIMARY KEY,
    manufacturer_id TEXT NOT NULL REFERENCES manufacturers(id) ON DELETE CASCADE,
    dealer_id INTEGER NOT NULL,
    name TEXT NOT NULL CHECK (length(name) BETWEEN 1 AND 100),
    category TEXT NOT NULL DEFAULT 'Sedan' CHECK (category IN ('Sedan', 'SUV', 'Wagon', 'Coupe', 'Hatchback')),
    model_year INTEGER NOT NULL CHECK (model_year BETWEEN 2015 AND 2023),
    created_at TEXT NOT NULL,
    updated_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_car_models_manufacturer ON car_models(manufacturer_id);
CREATE INDEX IF NOT EXISTS idx_car_models_category ON car_models(category);
CREATE INDEX IF NOT EXISTS idx_car_models_year ON car_models(model_year);
"#;
