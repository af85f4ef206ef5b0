pub const SCHEMA: &str = r#"
-- One row per managed customer installation
CREATE TABLE IF NOT EXISTS clients (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_name TEXT NOT NULL COLLATE NOCASE,
    domain_url TEXT NOT NULL,
    client_id TEXT NOT NULL,
    password TEXT NOT NULL,           -- argon2id hash with embedded salt
    original_password TEXT NOT NULL,

    -- Mirrors the most recently appended pull_history row
    latest_pull_date TEXT,
    latest_pull_by TEXT,
    gsos_version TEXT
);

-- Append-only log of version pulls
CREATE TABLE IF NOT EXISTS pull_history (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    client_id INTEGER NOT NULL REFERENCES clients(id) ON DELETE CASCADE,
    pull_date TEXT NOT NULL,
    pull_by TEXT NOT NULL,
    version TEXT
);

CREATE INDEX IF NOT EXISTS idx_clients_name ON clients(client_name);
CREATE INDEX IF NOT EXISTS idx_pull_history_client ON pull_history(client_id, pull_date);
"#;
