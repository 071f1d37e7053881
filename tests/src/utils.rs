use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use nmapr_core::executor::{ExecutionError, ProcessExecutor};

pub const NO_PORTS: [&str; 0] = [];

pub const SSH_REPORT: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<!DOCTYPE nmaprun>
<nmaprun scanner="nmap" args="nmap -sV -oX out.xml 10.0.0.1" version="7.94" xmloutputversion="1.05">
  <scaninfo type="syn" protocol="tcp" numservices="1000" services="1-1000"/>
  <host starttime="1700000000" endtime="1700000012">
    <status state="up" reason="arp-response" reason_ttl="0"/>
    <address addr="10.0.0.1" addrtype="ipv4"/>
    <hostnames>
    </hostnames>
    <ports>
      <extraports state="closed" count="999">
        <extrareasons reason="reset" count="999" proto="tcp" ports="1-21,23-1000"/>
      </extraports>
      <port protocol="tcp" portid="22">
        <state state="open" reason="syn-ack" reason_ttl="64"/>
        <service name="ssh" method="table" conf="3"/>
      </port>
    </ports>
    <times srtt="512" rttvar="3750" to="100000"/>
  </host>
  <runstats>
    <finished time="1700000012" timestr="Tue Nov 14 22:13:32 2023" elapsed="12.10" exit="success"/>
    <hosts up="1" down="0" total="1"/>
  </runstats>
</nmaprun>
"#;

/// What a [`ScriptedExecutor`] does once it has recorded the call.
#[derive(Clone, Copy)]
pub enum Behaviour {
    /// Writes the report to the `-oX` path and succeeds.
    WriteReport(&'static str),
    /// Writes the report on the first call only; later calls succeed silently.
    WriteReportOnce(&'static str),
    /// Succeeds without writing anything.
    WriteNothing,
    /// Fails as if nmap exited with status 1.
    Fail,
}

/// Test double for the process boundary: records every argument list and
/// plays back a canned outcome.
#[derive(Clone)]
pub struct ScriptedExecutor {
    pub calls: Arc<Mutex<Vec<Vec<String>>>>,
    behaviour: Behaviour,
}

impl ScriptedExecutor {
    pub fn new(behaviour: Behaviour) -> Self {
        Self {
            calls: Arc::default(),
            behaviour,
        }
    }

    pub fn recorded(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl ProcessExecutor for ScriptedExecutor {
    async fn execute(&self, args: &[String], _timeout: Duration) -> Result<(), ExecutionError> {
        let first = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(args.to_vec());
            calls.len() == 1
        };

        match self.behaviour {
            Behaviour::WriteReport(xml) => write_report(args, xml),
            Behaviour::WriteReportOnce(xml) if first => write_report(args, xml),
            Behaviour::WriteReportOnce(_) | Behaviour::WriteNothing => Ok(()),
            Behaviour::Fail => Err(ExecutionError::Failed {
                program: args[0].clone(),
                code: Some(1),
                stderr: "Failed to resolve \"nowhere\".".to_string(),
            }),
        }
    }
}

fn write_report(args: &[String], xml: &str) -> Result<(), ExecutionError> {
    let output = args.last().expect("command without -oX path");
    std::fs::write(output, xml).expect("failed to write canned report");
    Ok(())
}
