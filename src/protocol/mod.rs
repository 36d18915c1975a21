use std::path::PathBuf;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use tracing::{debug, info};

use crate::config::{validate_threshold, CoreConfig};
use crate::error::{CoreError, CoreResult};
use crate::model::building::{Building, Machine, MachineStats, Room};
use crate::services::catalog::{store, Catalog};
use crate::services::matching::{MatchResult, Resolver};
use crate::services::{api, assets, decorate, stats};

mod command;
use command::Command;

/// Long-lived state of one core process: configuration and the catalog
/// currently used for reconciliation.
pub struct Context {
    config: CoreConfig,
    catalog: Catalog,
}

impl Context {
    pub fn new(config: CoreConfig) -> CoreResult<Self> {
        let catalog = match &config.catalog_path {
            Some(path) => store::load_file(path)?,
            None => Catalog::builtin(),
        };
        Ok(Self { config, catalog })
    }

    pub fn with_catalog(config: CoreConfig, catalog: Catalog) -> Self {
        Self { config, catalog }
    }

    fn resolver(&self) -> Resolver<'_> {
        Resolver::new(&self.catalog, self.config.match_threshold)
    }

    fn api_client(&self) -> CoreResult<api::ApiClient> {
        let url = self
            .config
            .api_url
            .as_deref()
            .ok_or_else(|| CoreError::Config("LAUNDRY_API_URL is not set".into()))?;
        api::ApiClient::new(url, self.config.http_timeout)
    }
}

fn get_cmd(req: &Value) -> &str {
    req.get("cmd").and_then(|v| v.as_str()).unwrap_or("")
}

fn get_id(req: &Value) -> Value {
    req.get("id").cloned().unwrap_or(Value::Null)
}

fn get_payload(req: &Value) -> &Value {
    static EMPTY: Value = Value::Null;
    req.get("payload").unwrap_or(&EMPTY)
}

fn get_str<'a>(payload: &'a Value, key: &str) -> &'a str {
    payload.get(key).and_then(|v| v.as_str()).unwrap_or("")
}

fn ok(id: Value, payload: Value) -> String {
    json!({
        "id": id,
        "status": "ok",
        "payload": payload
    })
    .to_string()
}

fn err(id: Value, message: impl Into<String>) -> String {
    json!({
        "id": id,
        "status": "error",
        "message": message.into()
    })
    .to_string()
}

fn parse_array_from_payload<T: DeserializeOwned>(payload: &Value, key: &str) -> CoreResult<Vec<T>> {
    let arr = payload
        .get(key)
        .and_then(|v| v.as_array())
        .ok_or_else(|| CoreError::InvalidPayload(format!("payload.{key} must be an array")))?;

    let mut items: Vec<T> = Vec::with_capacity(arr.len());

    for (i, v) in arr.iter().cloned().enumerate() {
        match serde_json::from_value::<T>(v) {
            Ok(item) => items.push(item),
            Err(e) => {
                return Err(CoreError::InvalidPayload(format!(
                    "invalid {key} item at index {i}: {e}"
                )))
            }
        }
    }

    Ok(items)
}

fn match_json(result: &MatchResult) -> Value {
    match result {
        MatchResult::Matched { entry, score } => json!({
            "matched": true,
            "entry": entry,
            "score": score
        }),
        MatchResult::NoMatch => json!({ "matched": false }),
    }
}

fn machine_json(m: &Machine) -> Value {
    let mut v = serde_json::to_value(m).unwrap_or_else(|_| json!({}));
    if let Some(obj) = v.as_object_mut() {
        obj.insert("color".into(), json!(m.status.color()));
        obj.insert("remaining_label".into(), json!(stats::format_remaining(m.remaining_seconds)));
    }
    v
}

fn unix_now() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

pub fn handle(ctx: &mut Context, input: &str) -> String {
    let req: Value = match serde_json::from_str(input) {
        Ok(v) => v,
        Err(_) => {
            return json!({
                "status": "error",
                "message": "invalid json"
            })
            .to_string();
        }
    };

    let id = get_id(&req);
    let cmd_str = get_cmd(&req);
    let payload = get_payload(&req);

    debug!(cmd = cmd_str, "request");

    match dispatch(ctx, cmd_str, payload) {
        Ok(out) => ok(id, out),
        Err(e) => err(id, e.to_string()),
    }
}

fn dispatch(ctx: &mut Context, cmd_str: &str, payload: &Value) -> CoreResult<Value> {
    match Command::from(cmd_str) {
        Command::Ping => Ok(json!({ "message": "laundry-core alive" })),

        Command::CatalogList => Ok(json!({
            "entries": ctx.catalog.entries(),
            "count": ctx.catalog.len(),
            "fingerprint": ctx.catalog.fingerprint()
        })),

        Command::CatalogLoad => {
            let path = get_str(payload, "path");
            if path.is_empty() {
                return Err(CoreError::InvalidPayload("payload.path is required".into()));
            }
            ctx.catalog = store::load_file(&PathBuf::from(path))?;
            Ok(json!({
                "count": ctx.catalog.len(),
                "fingerprint": ctx.catalog.fingerprint()
            }))
        }

        Command::CatalogReset => {
            ctx.catalog = Catalog::builtin();
            info!(fingerprint = ctx.catalog.fingerprint(), "catalog reset to built-in");
            Ok(json!({
                "count": ctx.catalog.len(),
                "fingerprint": ctx.catalog.fingerprint()
            }))
        }

        Command::ResolveName => {
            let name = payload
                .get("name")
                .and_then(|v| v.as_str())
                .ok_or_else(|| CoreError::InvalidPayload("payload.name must be a string".into()))?;

            let threshold = match payload.get("threshold") {
                None | Some(Value::Null) => ctx.config.match_threshold,
                Some(v) => {
                    let t = v.as_f64().ok_or_else(|| {
                        CoreError::InvalidPayload("payload.threshold must be a number".into())
                    })?;
                    validate_threshold(t).map_err(|_| {
                        CoreError::InvalidPayload(format!(
                            "payload.threshold must be a finite non-negative number, got {t}"
                        ))
                    })?
                }
            };

            let result = Resolver::new(&ctx.catalog, threshold).resolve(name);
            Ok(match_json(&result))
        }

        Command::DecorateBuildings => {
            let buildings: Vec<Building> = parse_array_from_payload(payload, "buildings")?;
            let out = decorate::decorate(buildings, &ctx.resolver());
            Ok(json!({ "buildings": out }))
        }

        Command::BuildingsFetch => {
            let client = ctx.api_client()?;
            let buildings = client.list_buildings()?;
            let out = decorate::decorate(buildings, &ctx.resolver());
            Ok(json!({ "buildings": out }))
        }

        Command::BuildingDetail => {
            let building_id = get_str(payload, "id");
            if building_id.is_empty() {
                return Err(CoreError::InvalidPayload("payload.id is required".into()));
            }

            let client = ctx.api_client()?;
            let (buildings, detail) = thread::scope(|s| {
                let machines = s.spawn(|| client.building_machines(building_id));
                let buildings = client.list_buildings();
                let machines = machines.join().unwrap_or_else(|_| {
                    Err(CoreError::Http("machines request panicked".into()))
                });
                (buildings, machines)
            });
            let buildings = buildings?;
            let detail = detail?;

            let building = buildings
                .into_iter()
                .find(|b| b.id == building_id)
                .ok_or_else(|| CoreError::NotFound(format!("building {building_id}")))?;
            let building = decorate::decorate_one(building, &ctx.resolver());

            let (machines, machine_stats) = match detail.building.rooms {
                Some(rooms) => {
                    let machines = stats::flatten_rooms(&rooms);
                    let s = match detail.stats {
                        Some(upstream) => stats::merge(upstream, &machines),
                        None => stats::compute(&machines),
                    };
                    (machines, Some(s))
                }
                None => (Vec::new(), None),
            };

            Ok(json!({
                "building": building,
                "machines": machines.iter().map(machine_json).collect::<Vec<_>>(),
                "stats": machine_stats,
                "last_refresh": unix_now()
            }))
        }

        Command::AssetVariants => {
            let reference = get_str(payload, "reference");
            let v = assets::variants(reference, &ctx.config.asset_dir).ok_or_else(|| {
                CoreError::InvalidPayload("payload.reference has no file name".into())
            })?;
            Ok(serde_json::to_value(v)?)
        }

        Command::MachinesStats => {
            let rooms: Vec<Room> = parse_array_from_payload(payload, "rooms")?;
            let machines = stats::flatten_rooms(&rooms);
            let s: MachineStats = stats::compute(&machines);
            Ok(json!({
                "machines": machines.iter().map(machine_json).collect::<Vec<_>>(),
                "stats": s
            }))
        }

        Command::Unknown => Err(CoreError::UnknownCommand(cmd_str.to_string())),
    }
}
