use super::AdvisorStore;
use crate::{
    client_store::{ClientProfile, ClientRecord},
    error::AdvisorResult,
    types::ClientId,
};
use rusqlite::{params, Connection, OptionalExtension, Row};

const CLIENT_COLUMNS: &str =
    "client_id, name, age, risk_score, investment_total, goal_progress";

fn client_from_row(row: &Row<'_>) -> rusqlite::Result<ClientRecord> {
    Ok(ClientRecord {
        id:               row.get(0)?,
        name:             row.get(1)?,
        age:              row.get(2)?,
        risk_score:       row.get(3)?,
        investment_total: row.get::<_, i64>(4)? as u64,
        goal_progress:    row.get(5)?,
    })
}

fn write_client(conn: &Connection, session_id: &str, c: &ClientRecord) -> AdvisorResult<()> {
    conn.execute(
        "INSERT INTO client (
            session_id, client_id, name, age, risk_score, investment_total, goal_progress
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
        params![
            session_id,
            c.id,
            &c.name,
            c.age,
            c.risk_score,
            c.investment_total as i64,
            c.goal_progress,
        ],
    )?;
    Ok(())
}

fn write_profile(
    conn: &Connection,
    session_id: &str,
    client_id: ClientId,
    p: &ClientProfile,
) -> AdvisorResult<()> {
    let goals = serde_json::to_string(&p.investment_goals)?;
    conn.execute(
        "INSERT INTO client_profile (
            session_id, client_id, income, net_worth, investment_goals, time_horizon_years
        ) VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            session_id,
            client_id,
            p.income,
            p.net_worth as i64,
            goals,
            p.time_horizon_years,
        ],
    )?;
    Ok(())
}

impl AdvisorStore {
    // ── Client ────────────────────────────────────────────────────

    pub fn insert_client(&self, session_id: &str, c: &ClientRecord) -> AdvisorResult<()> {
        write_client(&self.conn, session_id, c)
    }

    /// Client row and profile row in one transaction: both land or neither.
    pub fn insert_onboarded_client(
        &self,
        session_id: &str,
        c: &ClientRecord,
        p: &ClientProfile,
    ) -> AdvisorResult<()> {
        let tx = self.conn.unchecked_transaction()?;
        write_client(&tx, session_id, c)?;
        write_profile(&tx, session_id, c.id, p)?;
        tx.commit()?;
        Ok(())
    }

    pub fn client_count(&self, session_id: &str) -> AdvisorResult<u32> {
        let count = self.conn.query_row(
            "SELECT COUNT(*) FROM client WHERE session_id = ?1",
            params![session_id],
            |row| row.get(0),
        )?;
        Ok(count)
    }

    /// All clients in insertion order.
    pub fn clients(&self, session_id: &str) -> AdvisorResult<Vec<ClientRecord>> {
        let mut stmt = self.conn.prepare(&format!(
            "SELECT {CLIENT_COLUMNS} FROM client WHERE session_id = ?1 ORDER BY seq ASC"
        ))?;
        let rows = stmt.query_map(params![session_id], client_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    pub fn get_client(
        &self,
        session_id: &str,
        client_id: ClientId,
    ) -> AdvisorResult<Option<ClientRecord>> {
        let client = self
            .conn
            .query_row(
                &format!(
                    "SELECT {CLIENT_COLUMNS} FROM client
                     WHERE session_id = ?1 AND client_id = ?2"
                ),
                params![session_id, client_id],
                client_from_row,
            )
            .optional()?;
        Ok(client)
    }

    // ── Onboarding profile ────────────────────────────────────────

    pub fn get_client_profile(
        &self,
        session_id: &str,
        client_id: ClientId,
    ) -> AdvisorResult<Option<ClientProfile>> {
        let row = self
            .conn
            .query_row(
                "SELECT income, net_worth, investment_goals, time_horizon_years
                 FROM client_profile WHERE session_id = ?1 AND client_id = ?2",
                params![session_id, client_id],
                |row| {
                    Ok((
                        row.get::<_, f64>(0)?,
                        row.get::<_, i64>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, u32>(3)?,
                    ))
                },
            )
            .optional()?;

        match row {
            None => Ok(None),
            Some((income, net_worth, goals, time_horizon_years)) => Ok(Some(ClientProfile {
                income,
                net_worth: net_worth as u64,
                investment_goals: serde_json::from_str(&goals)?,
                time_horizon_years,
            })),
        }
    }
}
