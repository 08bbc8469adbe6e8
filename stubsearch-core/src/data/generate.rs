use crate::data::{Agent, Alert, Hit, INDEX_NAME, Input, Location, LogMeta, Rule};
use chrono::{DateTime, Duration, TimeZone, Utc};
use once_cell::sync::Lazy;
use rand::Rng;
use uuid::Uuid;

/// The immutable in-memory alert collection served by every handler.
///
/// Generated once at startup and shared read-only for the process
/// lifetime; no mutation endpoint exists, so no synchronization is
/// needed around it.
#[derive(Debug)]
pub struct Dataset {
    hits: Vec<Hit>,
}

impl Dataset {
    /// Build the dataset: the curated seed alerts plus `generated`
    /// randomly sampled ones. Not reproducible across runs; the data is
    /// mock filler, not a correctness surface.
    pub fn generate(generated: usize) -> Self {
        let mut hits = SEED_HITS.clone();
        hits.extend(synthesize(generated));
        Self { hits }
    }

    #[cfg(test)]
    pub(crate) fn from_hits(hits: Vec<Hit>) -> Self {
        Self { hits }
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn len(&self) -> usize {
        self.hits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }
}

struct RuleTemplate {
    id: u32,
    description: &'static str,
    level: u8,
    groups: &'static [&'static str],
    category: &'static str,
}

struct AgentTemplate {
    id: &'static str,
    name: &'static str,
    ip: &'static str,
}

const RULE_TEMPLATES: &[RuleTemplate] = &[
    RuleTemplate {
        id: 5503,
        description: "Authentication failure",
        level: 5,
        groups: &["authentication_failed"],
        category: "authentication",
    },
    RuleTemplate {
        id: 5504,
        description: "SQL injection attempt",
        level: 12,
        groups: &["web_attack"],
        category: "security",
    },
    RuleTemplate {
        id: 5505,
        description: "File modification detected",
        level: 7,
        groups: &["file_integrity"],
        category: "system",
    },
    RuleTemplate {
        id: 5506,
        description: "Brute force attack detected",
        level: 10,
        groups: &["brute_force"],
        category: "security",
    },
    RuleTemplate {
        id: 5507,
        description: "XSS attack attempt",
        level: 8,
        groups: &["web_attack"],
        category: "security",
    },
    RuleTemplate {
        id: 5508,
        description: "Privilege escalation attempt",
        level: 11,
        groups: &["privilege_escalation"],
        category: "security",
    },
    RuleTemplate {
        id: 5509,
        description: "Malware detection",
        level: 13,
        groups: &["malware"],
        category: "security",
    },
    RuleTemplate {
        id: 5510,
        description: "Network intrusion",
        level: 9,
        groups: &["network"],
        category: "security",
    },
];

const AGENT_TEMPLATES: &[AgentTemplate] = &[
    AgentTemplate { id: "001", name: "web-server-01", ip: "192.168.1.100" },
    AgentTemplate { id: "002", name: "db-server-01", ip: "192.168.1.101" },
    AgentTemplate { id: "003", name: "file-server-01", ip: "192.168.1.102" },
    AgentTemplate { id: "004", name: "mail-server-01", ip: "192.168.1.103" },
    AgentTemplate { id: "005", name: "web-server-02", ip: "192.168.1.104" },
    AgentTemplate { id: "006", name: "api-server-01", ip: "192.168.1.105" },
    AgentTemplate { id: "007", name: "backup-server-01", ip: "192.168.1.106" },
];

const LOG_LEVELS: &[&str] = &["info", "warning", "error", "critical"];
const LOGGER_SUFFIXES: &[&str] = &["authd", "web", "syscheckd", "net"];
const LOG_FILES: &[&str] = &[
    "/var/log/auth.log",
    "/var/log/apache2/access.log",
    "/var/log/wazuh/syscheck.log",
    "/var/log/nginx/access.log",
];

impl RuleTemplate {
    fn to_rule(&self) -> Rule {
        Rule {
            id: self.id,
            description: self.description.to_string(),
            level: self.level,
            groups: self.groups.iter().map(|g| g.to_string()).collect(),
            category: self.category.to_string(),
        }
    }
}

impl AgentTemplate {
    fn to_agent(&self) -> Agent {
        Agent {
            id: self.id.to_string(),
            name: self.name.to_string(),
            ip: self.ip.to_string(),
        }
    }
}

/// Sample `count` alerts from the fixed rule/agent templates with a
/// random timestamp inside the last 24 hours.
fn synthesize(count: usize) -> Vec<Hit> {
    let mut rng = rand::rng();
    let base_time = Utc::now() - Duration::hours(24);

    (0..count)
        .map(|_| {
            let rule = &RULE_TEMPLATES[rng.random_range(0..RULE_TEMPLATES.len())];
            let agent = &AGENT_TEMPLATES[rng.random_range(0..AGENT_TEMPLATES.len())];
            let timestamp = base_time + Duration::minutes(rng.random_range(0..=1440));

            Hit {
                index: INDEX_NAME.to_string(),
                doc_type: "_doc".to_string(),
                id: Uuid::new_v4().to_string(),
                score: rng.random_range(0.5..2.0),
                source: Alert {
                    timestamp,
                    agent: agent.to_agent(),
                    rule: rule.to_rule(),
                    log: LogMeta {
                        level: LOG_LEVELS[rng.random_range(0..LOG_LEVELS.len())].to_string(),
                        logger: format!(
                            "wazuh-{}",
                            LOGGER_SUFFIXES[rng.random_range(0..LOGGER_SUFFIXES.len())]
                        ),
                    },
                    message: format!("{} on {}", rule.description, agent.name),
                    full_log: format!(
                        "Sep 22 {} {} wazuh: {}",
                        timestamp.format("%H:%M:%S"),
                        agent.name,
                        rule.description
                    ),
                    input: Input { kind: "log".to_string() },
                    location: Location {
                        file: LOG_FILES[rng.random_range(0..LOG_FILES.len())].to_string(),
                        line: rng.random_range(1000..=9999),
                    },
                },
            }
        })
        .collect()
}

/// The five curated alerts every dataset starts with. Ids are drawn
/// once per process so repeated searches see stable documents.
static SEED_HITS: Lazy<Vec<Hit>> = Lazy::new(|| {
    vec![
        seed_hit(
            seed_time(21, 30),
            &AGENT_TEMPLATES[0],
            &RULE_TEMPLATES[0],
            "info",
            "wazuh-authd",
            "Authentication failed for user 'admin' from '192.168.1.50'",
            "Sep 22 21:30:00 web-server-01 sshd[1234]: Failed password for admin from 192.168.1.50 port 22 ssh2",
            "/var/log/auth.log",
            1234,
        ),
        seed_hit(
            seed_time(21, 25),
            &AGENT_TEMPLATES[1],
            &RULE_TEMPLATES[1],
            "warning",
            "wazuh-web",
            "SQL injection attempt detected in web application",
            "Sep 22 21:25:00 db-server-01 apache2[5678]: [client 192.168.1.200] GET /login.php?id=1' OR '1'='1 HTTP/1.1",
            "/var/log/apache2/access.log",
            5678,
        ),
        seed_hit(
            seed_time(21, 20),
            &AGENT_TEMPLATES[2],
            &RULE_TEMPLATES[2],
            "info",
            "wazuh-syscheckd",
            "File /etc/passwd modified",
            "Sep 22 21:20:00 file-server-01 wazuh-syscheckd: File /etc/passwd modified (size: 1234 -> 1256)",
            "/var/log/wazuh/syscheck.log",
            9012,
        ),
        seed_hit(
            seed_time(21, 15),
            &AGENT_TEMPLATES[3],
            &RULE_TEMPLATES[3],
            "warning",
            "wazuh-authd",
            "Multiple failed login attempts from 192.168.1.75",
            "Sep 22 21:15:00 mail-server-01 sshd[3456]: 5 failed password attempts for user 'root' from 192.168.1.75",
            "/var/log/auth.log",
            3456,
        ),
        seed_hit(
            seed_time(21, 10),
            &AGENT_TEMPLATES[4],
            &RULE_TEMPLATES[4],
            "warning",
            "wazuh-web",
            "XSS attack attempt detected in web form",
            "Sep 22 21:10:00 web-server-02 apache2[7890]: [client 192.168.1.150] POST /contact.php - XSS payload detected",
            "/var/log/apache2/access.log",
            7890,
        ),
    ]
});

fn seed_time(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 9, 22, hour, minute, 0)
        .single()
        .expect("seed timestamp is valid")
}

#[allow(clippy::too_many_arguments)]
fn seed_hit(
    timestamp: DateTime<Utc>,
    agent: &AgentTemplate,
    rule: &RuleTemplate,
    log_level: &str,
    logger: &str,
    message: &str,
    full_log: &str,
    file: &str,
    line: u32,
) -> Hit {
    Hit {
        index: INDEX_NAME.to_string(),
        doc_type: "_doc".to_string(),
        id: Uuid::new_v4().to_string(),
        score: 1.0,
        source: Alert {
            timestamp,
            agent: agent.to_agent(),
            rule: rule.to_rule(),
            log: LogMeta {
                level: log_level.to_string(),
                logger: logger.to_string(),
            },
            message: message.to_string(),
            full_log: full_log.to_string(),
            input: Input { kind: "log".to_string() },
            location: Location {
                file: file.to_string(),
                line,
            },
        },
    }
}
