use super::*;

impl ApiClient {
    /// List inbound snaps. There is no retry layer anywhere in the client;
    /// the next poll cycle is the only retry.
    pub fn list_snaps(&self) -> Result<Vec<Snap>> {
        let resp = self.get("/snap").send().context("list snaps")?;
        let out: Envelope<Vec<Snap>> = self
            .ensure_ok(resp, "list snaps")?
            .json()
            .context("parse snaps")?;
        Ok(out.data)
    }

    pub fn list_users(&self) -> Result<Vec<User>> {
        let resp = self.get("/user").send().context("list users")?;
        let out: Envelope<Vec<User>> = self
            .ensure_ok(resp, "list users")?
            .json()
            .context("parse users")?;
        Ok(out.data)
    }

    /// Fetch one snap's viewable content. A payload missing `image` or
    /// `duration` fails the parse and counts as an error.
    pub fn get_snap(&self, snap_id: &str) -> Result<SnapContent> {
        let resp = self
            .get(&format!("/snap/{}", snap_id))
            .send()
            .context("fetch snap")?;
        let out: Envelope<SnapContent> = self
            .ensure_ok(resp, "fetch snap")?
            .json()
            .context("parse snap content")?;
        Ok(out.data)
    }

    /// Tell the backend the snap has been consumed.
    pub fn mark_seen(&self, snap_id: &str) -> Result<()> {
        let resp = self
            .put(&format!("/snap/seen/{}", snap_id))
            .send()
            .context("mark seen")?;
        let _ = self.ensure_ok(resp, "mark seen")?;
        Ok(())
    }
}
