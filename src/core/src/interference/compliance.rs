use crate::error::{FrontOfficeError, FrontOfficeResult};
use crate::interference::{DemandType, OwnerDemand};
use log::debug;
use serde::{Deserialize, Serialize};

/// Resolved records kept once the ledger grows past this; pending records
/// are never pruned.
pub const MAX_RESOLVED_COMPLIANCE_RECORDS: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ComplianceStatus {
    Pending,
    Complied,
    Defied,
    Expired,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceRecord {
    pub demand_id: String,
    pub demand_type: DemandType,
    pub status: ComplianceStatus,
    pub issued_week: u32,
    pub deadline: u32,
    pub resolved_week: Option<u32>,
    pub consequence_applied: bool,
}

impl ComplianceRecord {
    fn pending(demand: &OwnerDemand) -> Self {
        ComplianceRecord {
            demand_id: demand.id.clone(),
            demand_type: demand.demand_type,
            status: ComplianceStatus::Pending,
            issued_week: demand.issued_week,
            deadline: demand.deadline,
            resolved_week: None,
            consequence_applied: false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.status == ComplianceStatus::Pending
    }
}

/// Per-team ledger of owner demands and how the GM answered them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterferenceState {
    pub team_id: u32,
    pub compliance_history: Vec<ComplianceRecord>,
    pub total_compliances: u32,
    pub total_defiances: u32,
    pub consecutive_defiances: u32,
    pub last_intervention_week: Option<u32>,
    /// Last demand sequence handed out; survives GM changes with the ledger.
    #[serde(default)]
    pub demand_sequence: u32,
}

impl InterferenceState {
    pub fn new(team_id: u32) -> Self {
        InterferenceState {
            team_id,
            compliance_history: Vec::new(),
            total_compliances: 0,
            total_defiances: 0,
            consecutive_defiances: 0,
            last_intervention_week: None,
            demand_sequence: 0,
        }
    }

    pub fn next_demand_sequence(&mut self) -> u32 {
        self.demand_sequence += 1;
        self.demand_sequence
    }

    /// Opens a pending record for a freshly issued demand.
    pub fn register_demand(&mut self, demand: &OwnerDemand) -> FrontOfficeResult<()> {
        if self.find_record(&demand.id).is_some() {
            return Err(FrontOfficeError::DuplicateDemand(demand.id.clone()));
        }

        self.compliance_history.push(ComplianceRecord::pending(demand));
        self.last_intervention_week = Some(demand.issued_week);

        Ok(())
    }

    /// Week numbers restart with the season.
    pub fn start_new_season(&mut self) {
        self.last_intervention_week = None;
    }

    pub fn find_record(&self, demand_id: &str) -> Option<&ComplianceRecord> {
        self.compliance_history.iter().find(|r| r.demand_id == demand_id)
    }

    pub fn pending_records(&self) -> impl Iterator<Item = &ComplianceRecord> {
        self.compliance_history.iter().filter(|r| r.is_pending())
    }

    pub fn record_compliance(&mut self, demand: &OwnerDemand, week: u32) {
        self.resolve(demand, ComplianceStatus::Complied, week);

        self.total_compliances += 1;
        self.consecutive_defiances = 0;
    }

    pub fn record_defiance(&mut self, demand: &OwnerDemand, week: u32) {
        self.resolve(demand, ComplianceStatus::Defied, week);

        self.total_defiances += 1;
        self.consecutive_defiances += 1;
    }

    /// Converts pending records whose deadline has passed into defiances.
    /// Returns the demands that expired this call.
    pub fn check_expired_demands(&mut self, demands: &[OwnerDemand], current_week: u32) -> Vec<OwnerDemand> {
        let mut expired = Vec::new();

        for demand in demands {
            let overdue = self
                .find_record(&demand.id)
                .map(|r| r.is_pending() && current_week > r.deadline)
                .unwrap_or(false);

            if overdue {
                self.resolve(demand, ComplianceStatus::Expired, current_week);
                self.total_defiances += 1;
                self.consecutive_defiances += 1;

                debug!("team: {}, demand {} expired in week {}", self.team_id, demand.id, current_week);

                expired.push(demand.clone());
            }
        }

        expired
    }

    pub fn mark_consequence_applied(&mut self, demand_id: &str) {
        if let Some(record) = self.compliance_history.iter_mut().find(|r| r.demand_id == demand_id) {
            record.consequence_applied = true;
        }
    }

    /// Share of resolved demands the GM went along with, 0-100.
    pub fn get_compliance_rate(&self) -> Option<f64> {
        let total = self.total_compliances + self.total_defiances;

        if total == 0 {
            return None;
        }

        Some(self.total_compliances as f64 * 100.0 / total as f64)
    }

    pub fn is_valid(&self) -> bool {
        let ids_unique = self
            .compliance_history
            .iter()
            .enumerate()
            .all(|(i, r)| !self.compliance_history[i + 1..].iter().any(|o| o.demand_id == r.demand_id));

        let resolved_consistent = self
            .compliance_history
            .iter()
            .all(|r| r.is_pending() == r.resolved_week.is_none());

        ids_unique && resolved_consistent && self.consecutive_defiances <= self.total_defiances
    }

    fn resolve(&mut self, demand: &OwnerDemand, status: ComplianceStatus, week: u32) {
        match self.compliance_history.iter_mut().find(|r| r.demand_id == demand.id) {
            Some(record) => {
                record.status = status;
                record.resolved_week = Some(week);
            }
            None => {
                let mut record = ComplianceRecord::pending(demand);
                record.status = status;
                record.resolved_week = Some(week);
                self.compliance_history.push(record);
            }
        }

        self.prune_history();
    }

    fn prune_history(&mut self) {
        let resolved = self.compliance_history.iter().filter(|r| !r.is_pending()).count();

        if resolved <= MAX_RESOLVED_COMPLIANCE_RECORDS {
            return;
        }

        let mut to_drop = resolved - MAX_RESOLVED_COMPLIANCE_RECORDS;
        self.compliance_history.retain(|r| {
            if to_drop > 0 && !r.is_pending() {
                to_drop -= 1;
                false
            } else {
                true
            }
        });
    }
}
