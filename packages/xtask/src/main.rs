use clap::Parser;
use xtask_base::{
    ci::{StandardVersions, CI},
    cmd, in_workspace, CommonCmds,
};

const DEMO_DIR: &str = "packages/demo";

#[derive(Parser)]
enum Commands {
    /// Serve the dropdown demo and open it in a browser
    Demo,
    /// Build a release bundle of the demo into `packages/demo/dist`
    BuildDemo,
    /// Check the components compile for the browser
    CheckWasm,
    #[clap(flatten)]
    Common(CommonCmds),
}

fn main() {
    in_workspace(|workspace| {
        type Cmds = Commands;

        match Cmds::parse() {
            Cmds::Demo => cmd!("trunk serve --open").dir(DEMO_DIR).run()?,
            Cmds::BuildDemo => cmd!("trunk build --release").dir(DEMO_DIR).run()?,
            Cmds::CheckWasm => {
                cmd!("cargo check --target wasm32-unknown-unknown -p silkenweb-pui").run()?;
                cmd!("cargo check --target wasm32-unknown-unknown -p silkenweb-pui-demo").run()?
            }
            Cmds::Common(cmds) => cmds.sub_command::<Cmds>(
                workspace,
                [],
                CI::standard_workflow(
                    StandardVersions {
                        rustc_stable_version: "1.87.0",
                        rustc_nightly_version: "nightly-2025-03-15",
                        udeps_version: "0.1.55",
                    },
                    &[],
                ),
                |_| Ok(()),
            )?,
        }

        Ok(())
    });
}
