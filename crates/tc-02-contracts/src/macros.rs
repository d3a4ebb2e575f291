//! Call table declaration for one contract.

/// Implement `FunctionInput` / `ProcedureInput` for each listed payload and
/// emit the contract's `CALLS` table.
macro_rules! contract_calls {
    (
        index: $index:expr;
        functions {
            $( $fid:literal $fname:literal : $fin:ty => $fout:ty; )*
        }
        procedures {
            $( $pid:literal $pname:literal : $pin:ty; )*
        }
    ) => {
        $(
            impl tc_01_call_engine::FunctionInput for $fin {
                const SPEC: tc_01_call_engine::ContractCallSpec =
                    tc_01_call_engine::ContractCallSpec::function(
                        $fname,
                        $index,
                        $fid,
                        <$fin as tc_01_call_engine::Wire>::SIZE,
                    );
                type Output = $fout;
            }
        )*

        $(
            impl tc_01_call_engine::ProcedureInput for $pin {
                const SPEC: tc_01_call_engine::ContractCallSpec =
                    tc_01_call_engine::ContractCallSpec::procedure(
                        $pname,
                        $index,
                        $pid,
                        <$pin as tc_01_call_engine::Wire>::SIZE,
                    );
            }
        )*

        /// Every operation of this contract.
        pub const CALLS: &[tc_01_call_engine::ContractCallSpec] = &[
            $( <$fin as tc_01_call_engine::FunctionInput>::SPEC, )*
            $( <$pin as tc_01_call_engine::ProcedureInput>::SPEC, )*
        ];
    };
}
